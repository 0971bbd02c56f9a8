use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "kids_training")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub kid_name: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub age: i32,
    pub batch_time: String,
    pub monthly_fee: f64,
    pub start_date: NaiveDate,
    pub emergency_contact: Option<String>,
    pub medical_notes: Option<String>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

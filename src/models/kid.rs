use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterKidRequest {
    #[schema(example = "Aarav")]
    pub kid_name: String,
    #[schema(example = "Priya Sharma")]
    pub parent_name: String,
    #[schema(example = "+919876543210")]
    pub parent_phone: String,
    #[schema(example = 8)]
    pub age: i32,
    #[schema(example = "Evening (5:00-6:00 PM)")]
    pub batch_time: String,
    #[schema(example = 1000.0)]
    pub monthly_fee: f64,
    #[schema(example = "2024-01-15")]
    pub start_date: NaiveDate,
    pub emergency_contact: Option<String>,
    pub medical_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateKidRequest {
    pub kid_name: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub age: Option<i32>,
    pub batch_time: Option<String>,
    pub monthly_fee: Option<f64>,
    pub emergency_contact: Option<String>,
    pub medical_notes: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct KidQuery {
    /// Substring match against the kid's or the parent's name.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KidResponse {
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
    pub created_at: DateTime<Utc>,
}

impl From<crate::entities::kids_training::Model> for KidResponse {
    fn from(k: crate::entities::kids_training::Model) -> Self {
        Self {
            id: k.id,
            kid_name: k.kid_name,
            parent_name: k.parent_name,
            parent_phone: k.parent_phone,
            age: k.age,
            batch_time: k.batch_time,
            monthly_fee: k.monthly_fee,
            start_date: k.start_date,
            emergency_contact: k.emergency_contact,
            medical_notes: k.medical_notes,
            active: k.active,
            created_at: k.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KidPaymentResponse {
    pub id: i64,
    pub kid_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entities::kids_payment_history::Model> for KidPaymentResponse {
    fn from(p: crate::entities::kids_payment_history::Model) -> Self {
        Self {
            id: p.id,
            kid_id: p.kid_id,
            amount: p.amount,
            payment_date: p.payment_date,
            payment_method: p.payment_method,
            notes: p.notes,
            created_at: p.created_at.unwrap_or_else(Utc::now),
        }
    }
}

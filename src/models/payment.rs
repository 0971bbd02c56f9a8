use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordPaymentRequest {
    #[schema(example = 1500.0)]
    pub amount: f64,
    #[schema(example = "2024-02-01")]
    pub payment_date: NaiveDate,
    #[schema(example = "UPI")]
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentRecordResponse {
    pub id: i64,
    pub member_id: i64,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entities::payment_history::Model> for PaymentRecordResponse {
    fn from(p: crate::entities::payment_history::Model) -> Self {
        Self {
            id: p.id,
            member_id: p.member_id,
            amount: p.amount,
            payment_date: p.payment_date,
            payment_method: p.payment_method,
            notes: p.notes,
            created_at: p.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Recent payment joined with the member's name, for the dashboard.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecentPaymentResponse {
    pub member_name: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
}

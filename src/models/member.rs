use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Billing period classification. Stored as a string in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "snake_case")]
pub enum MembershipType {
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "quarterly")]
    Quarterly,
    #[sea_orm(string_value = "half_yearly")]
    HalfYearly,
    #[sea_orm(string_value = "annual")]
    Annual,
}

impl MembershipType {
    /// Renewal period in days for this tier.
    pub fn period_days(&self) -> i64 {
        match self {
            MembershipType::Monthly => 30,
            MembershipType::Quarterly => 90,
            MembershipType::HalfYearly => 180,
            MembershipType::Annual => 365,
        }
    }

    /// Lenient parser for tier labels coming from imports or legacy data.
    /// Unrecognized labels fall back to monthly (30 days).
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "quarterly" => MembershipType::Quarterly,
            "half_yearly" | "half yearly" => MembershipType::HalfYearly,
            "annual" => MembershipType::Annual,
            _ => MembershipType::Monthly,
        }
    }
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipType::Monthly => write!(f, "Monthly"),
            MembershipType::Quarterly => write!(f, "Quarterly"),
            MembershipType::HalfYearly => write!(f, "Half Yearly"),
            MembershipType::Annual => write!(f, "Annual"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    #[schema(example = "Ravi Kumar")]
    pub name: String,
    #[schema(example = "+919876543210")]
    pub phone: String,
    #[schema(example = "member@email.com")]
    pub email: Option<String>,
    pub membership_type: MembershipType,
    #[schema(example = 1500.0)]
    pub amount: f64,
    #[schema(example = "2024-01-01")]
    pub payment_date: NaiveDate,
    /// Days before the due date at which the member shows up as due-soon.
    #[schema(example = 30)]
    pub reminder_days: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub membership_type: Option<MembershipType>,
    pub reminder_days: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberSortKey {
    Name,
    PaymentDate,
    Amount,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MemberQuery {
    /// Substring match against name, phone or email.
    pub search: Option<String>,
    pub membership_type: Option<MembershipType>,
    pub sort_by: Option<MemberSortKey>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub membership_type: MembershipType,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub reminder_days: i32,
    pub notes: Option<String>,
    pub next_due_date: NaiveDate,
    pub days_remaining: i64,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entities::members::Model> for MemberResponse {
    fn from(m: crate::entities::members::Model) -> Self {
        let today = Utc::now().date_naive();
        let next_due_date = crate::utils::next_due_date(m.payment_date, m.membership_type);
        Self {
            id: m.id,
            name: m.name,
            phone: m.phone,
            email: m.email,
            membership_type: m.membership_type,
            amount: m.amount,
            payment_date: m.payment_date,
            reminder_days: m.reminder_days,
            notes: m.notes,
            next_due_date,
            days_remaining: (next_due_date - today).num_days(),
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_days() {
        assert_eq!(MembershipType::Monthly.period_days(), 30);
        assert_eq!(MembershipType::Quarterly.period_days(), 90);
        assert_eq!(MembershipType::HalfYearly.period_days(), 180);
        assert_eq!(MembershipType::Annual.period_days(), 365);
    }

    #[test]
    fn test_parse_lenient_defaults_to_monthly() {
        assert_eq!(MembershipType::parse_lenient("annual"), MembershipType::Annual);
        assert_eq!(
            MembershipType::parse_lenient("Half Yearly"),
            MembershipType::HalfYearly
        );
        assert_eq!(
            MembershipType::parse_lenient("gold tier"),
            MembershipType::Monthly
        );
        assert_eq!(MembershipType::parse_lenient(""), MembershipType::Monthly);
    }
}

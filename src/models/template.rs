use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two reminder template slots. Stored as a string in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "snake_case")]
pub enum TemplateType {
    #[sea_orm(string_value = "payment_reminder")]
    PaymentReminder,
    #[sea_orm(string_value = "overdue_reminder")]
    OverdueReminder,
}

impl TemplateType {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "payment_reminder" => Some(TemplateType::PaymentReminder),
            "overdue_reminder" => Some(TemplateType::OverdueReminder),
            _ => None,
        }
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateType::PaymentReminder => write!(f, "payment_reminder"),
            TemplateType::OverdueReminder => write!(f, "overdue_reminder"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateTemplateRequest {
    pub message_text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TemplateResponse {
    pub template_type: TemplateType,
    pub message_text: String,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::entities::message_templates::Model> for TemplateResponse {
    fn from(t: crate::entities::message_templates::Model) -> Self {
        Self {
            template_type: t.template_type,
            message_text: t.message_text,
            updated_at: t.updated_at.unwrap_or_else(Utc::now),
        }
    }
}

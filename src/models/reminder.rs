use crate::models::{MembershipType, TemplateType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification of a member's payment status relative to today.
/// Members far from their due date are not classified at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    DueSoon,
    Overdue,
}

impl ReminderKind {
    /// The template slot a reminder of this kind is rendered from.
    pub fn template_type(&self) -> TemplateType {
        match self {
            ReminderKind::DueSoon => TemplateType::PaymentReminder,
            ReminderKind::Overdue => TemplateType::OverdueReminder,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PendingReminder {
    pub member_id: i64,
    pub member_name: String,
    pub phone: String,
    pub membership_type: MembershipType,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub next_due_date: NaiveDate,
    /// Negative when overdue.
    pub days_remaining: i64,
    /// `|days_remaining|` when overdue, 0 otherwise.
    pub overdue_days: i64,
    pub reminder_days: i32,
    pub kind: ReminderKind,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WhatsAppReminderResponse {
    pub member_id: i64,
    pub kind: ReminderKind,
    pub message: String,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogReminderRequest {
    pub reminder_type: TemplateType,
    pub message: String,
    /// Defaults to true when omitted.
    pub success: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReminderLogResponse {
    pub id: i64,
    pub member_id: i64,
    pub reminder_type: TemplateType,
    pub message: String,
    pub success: bool,
    pub sent_at: DateTime<Utc>,
}

impl From<crate::entities::reminder_logs::Model> for ReminderLogResponse {
    fn from(l: crate::entities::reminder_logs::Model) -> Self {
        Self {
            id: l.id,
            member_id: l.member_id,
            reminder_type: l.reminder_type,
            message: l.message,
            success: l.success,
            sent_at: l.sent_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkMessageRequest {
    pub message: String,
    /// Append the academy signature block to the message.
    pub include_signature: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkMessageLink {
    pub member_id: i64,
    pub member_name: String,
    pub phone: String,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_members: u64,
    /// Members whose next due date has not passed yet.
    pub active_subscriptions: u64,
    pub pending_reminders: u64,
    pub kids_enrolled: u64,
}

use crate::config::AcademyConfig;
use crate::entities::{kids_training, members, message_templates, reminder_logs};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{classify, days_remaining, next_due_date, render_template, wa_link};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct ReminderService {
    pool: DatabaseConnection,
    academy: AcademyConfig,
}

impl ReminderService {
    pub fn new(pool: DatabaseConnection, academy: AcademyConfig) -> Self {
        Self { pool, academy }
    }

    /// Members whose payment is overdue or due within their reminder window,
    /// ordered by member name.
    pub async fn pending_reminders(&self, today: NaiveDate) -> AppResult<Vec<PendingReminder>> {
        let members = members::Entity::find()
            .order_by_asc(members::Column::Name)
            .all(&self.pool)
            .await?;

        let pending = members
            .into_iter()
            .filter_map(|m| {
                let remaining = days_remaining(m.payment_date, m.membership_type, today);
                classify(remaining, m.reminder_days).map(|kind| PendingReminder {
                    member_id: m.id,
                    member_name: m.name,
                    phone: m.phone,
                    membership_type: m.membership_type,
                    amount: m.amount,
                    payment_date: m.payment_date,
                    next_due_date: next_due_date(m.payment_date, m.membership_type),
                    days_remaining: remaining,
                    overdue_days: remaining.min(0).abs(),
                    reminder_days: m.reminder_days,
                    kind,
                })
            })
            .collect();

        Ok(pending)
    }

    /// Render the reminder message for one member and wrap it in a wa.me
    /// deep-link. Members with nothing pending get the plain payment
    /// reminder for their upcoming due date.
    pub async fn whatsapp_reminder(
        &self,
        member_id: i64,
        today: NaiveDate,
    ) -> AppResult<WhatsAppReminderResponse> {
        let member = members::Entity::find_by_id(member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let remaining = days_remaining(member.payment_date, member.membership_type, today);
        let kind = classify(remaining, member.reminder_days).unwrap_or(ReminderKind::DueSoon);

        let template = message_templates::Entity::find()
            .filter(message_templates::Column::TemplateType.eq(kind.template_type()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Template {} not found", kind.template_type()))
            })?;

        let vars = self.reminder_vars(&member, today);
        let message = render_template(&template.message_text, &vars)?;
        let link = wa_link(&member.phone, &message);

        Ok(WhatsAppReminderResponse {
            member_id,
            kind,
            message,
            link,
        })
    }

    /// Record that a reminder was sent (or at least handed to the operator).
    pub async fn log_reminder(
        &self,
        member_id: i64,
        req: LogReminderRequest,
    ) -> AppResult<ReminderLogResponse> {
        members::Entity::find_by_id(member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let entry = reminder_logs::ActiveModel {
            member_id: Set(member_id),
            reminder_type: Set(req.reminder_type),
            message: Set(req.message),
            success: Set(req.success.unwrap_or(true)),
            sent_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(entry.into())
    }

    /// Build a wa.me link per member for a free-text announcement.
    pub async fn bulk_links(&self, req: BulkMessageRequest) -> AppResult<Vec<BulkMessageLink>> {
        if req.message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Message must not be empty".to_string(),
            ));
        }

        let mut message = req.message;
        if req.include_signature.unwrap_or(false) {
            message.push_str(&format!(
                "\n\n---\n{}\nContact: {}",
                self.academy.name, self.academy.contact_phone
            ));
        }

        let members = members::Entity::find()
            .order_by_asc(members::Column::Name)
            .all(&self.pool)
            .await?;

        log::info!("Generated bulk message links for {} members", members.len());
        Ok(members
            .into_iter()
            .map(|m| BulkMessageLink {
                member_id: m.id,
                member_name: m.name,
                link: wa_link(&m.phone, &message),
                phone: m.phone,
            })
            .collect())
    }

    pub async fn dashboard_stats(&self, today: NaiveDate) -> AppResult<DashboardStats> {
        let members = members::Entity::find().all(&self.pool).await?;

        let mut active_subscriptions = 0u64;
        let mut pending_reminders = 0u64;
        for m in &members {
            let remaining = days_remaining(m.payment_date, m.membership_type, today);
            if remaining >= 0 {
                active_subscriptions += 1;
            }
            if classify(remaining, m.reminder_days).is_some() {
                pending_reminders += 1;
            }
        }

        let kids_enrolled = kids_training::Entity::find()
            .filter(kids_training::Column::Active.eq(true))
            .count(&self.pool)
            .await?;

        Ok(DashboardStats {
            total_members: members.len() as u64,
            active_subscriptions,
            pending_reminders,
            kids_enrolled,
        })
    }

    fn reminder_vars(
        &self,
        member: &members::Model,
        today: NaiveDate,
    ) -> HashMap<&'static str, String> {
        let due = next_due_date(member.payment_date, member.membership_type);
        let overdue_days = (today - due).num_days().max(0);

        HashMap::from([
            ("member_name", member.name.clone()),
            ("amount", format!("{}", member.amount)),
            ("due_date", due.format("%d-%m-%Y").to_string()),
            ("overdue_days", overdue_days.to_string()),
            ("membership_type", member.membership_type.to_string()),
            ("phone", self.academy.contact_phone.clone()),
            ("academy_name", self.academy.name.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemberService, TemplateService};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn setup() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
        opts.max_connections(1);
        let pool = Database::connect(opts).await.unwrap();
        Migrator::up(&pool, None).await.unwrap();
        pool
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn add_member(
        pool: &DatabaseConnection,
        name: &str,
        phone: &str,
        membership_type: MembershipType,
        payment_date: NaiveDate,
    ) {
        MemberService::new(pool.clone())
            .register_member(CreateMemberRequest {
                name: name.to_string(),
                phone: phone.to_string(),
                email: None,
                membership_type,
                amount: 1500.0,
                payment_date,
                reminder_days: Some(30),
                notes: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn pending_reminders_are_classified_and_ordered_by_name() {
        let pool = setup().await;
        let service = ReminderService::new(pool.clone(), AcademyConfig::default());

        // Overdue: due 2024-01-31, today 2024-02-15.
        add_member(&pool, "Zara", "9876543210", MembershipType::Monthly, date(2024, 1, 1)).await;
        // Due soon: due 2024-02-25, 10 days out.
        add_member(&pool, "Aarav", "9876543211", MembershipType::Monthly, date(2024, 1, 26)).await;
        // Not pending: annual, due late December.
        add_member(&pool, "Meera", "9876543212", MembershipType::Annual, date(2024, 1, 1)).await;

        let pending = service.pending_reminders(date(2024, 2, 15)).await.unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].member_name, "Aarav");
        assert_eq!(pending[0].kind, ReminderKind::DueSoon);
        assert_eq!(pending[0].days_remaining, 10);
        assert_eq!(pending[0].overdue_days, 0);
        assert_eq!(pending[1].member_name, "Zara");
        assert_eq!(pending[1].kind, ReminderKind::Overdue);
        assert_eq!(pending[1].days_remaining, -15);
        assert_eq!(pending[1].overdue_days, 15);
    }

    #[tokio::test]
    async fn whatsapp_reminder_renders_template_and_link() {
        let pool = setup().await;
        TemplateService::new(pool.clone()).ensure_defaults().await.unwrap();
        let service = ReminderService::new(pool.clone(), AcademyConfig::default());

        add_member(&pool, "Zara", "9876543210", MembershipType::Monthly, date(2024, 1, 1)).await;
        let pending = service.pending_reminders(date(2024, 2, 15)).await.unwrap();
        let reminder = service
            .whatsapp_reminder(pending[0].member_id, date(2024, 2, 15))
            .await
            .unwrap();

        assert_eq!(reminder.kind, ReminderKind::Overdue);
        assert!(reminder.message.contains("Zara"));
        assert!(reminder.message.contains("overdue by 15 days"));
        assert!(!reminder.message.contains('{'));
        assert!(reminder.link.starts_with("https://wa.me/919876543210?text="));
    }

    #[tokio::test]
    async fn dashboard_counts_members_kids_and_pending() {
        let pool = setup().await;
        let service = ReminderService::new(pool.clone(), AcademyConfig::default());

        add_member(&pool, "Zara", "9876543210", MembershipType::Monthly, date(2024, 1, 1)).await;
        add_member(&pool, "Meera", "9876543212", MembershipType::Annual, date(2024, 1, 1)).await;

        let stats = service.dashboard_stats(date(2024, 2, 15)).await.unwrap();
        assert_eq!(stats.total_members, 2);
        assert_eq!(stats.active_subscriptions, 1); // Zara is past due
        assert_eq!(stats.pending_reminders, 1);
        assert_eq!(stats.kids_enrolled, 0);
    }

    #[tokio::test]
    async fn bulk_links_cover_every_member() {
        let pool = setup().await;
        let service = ReminderService::new(pool.clone(), AcademyConfig::default());

        add_member(&pool, "Zara", "9876543210", MembershipType::Monthly, date(2024, 1, 1)).await;
        add_member(&pool, "Aarav", "9876543211", MembershipType::Monthly, date(2024, 1, 1)).await;

        let links = service
            .bulk_links(BulkMessageRequest {
                message: "New court timings from next week".to_string(),
                include_signature: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].member_name, "Aarav");
        assert!(links[0].link.contains("wa.me/919876543211"));
        // Signature rides along, percent-encoded.
        assert!(links[0].link.contains("KJ%20Badminton%20Academy"));
    }
}

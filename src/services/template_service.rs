use crate::entities::message_templates;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

const DEFAULT_PAYMENT_REMINDER: &str = "Hi {member_name}!\n\n\
Your {academy_name} membership payment of \u{20b9}{amount} is due on {due_date}.\n\n\
Please make the payment at your earliest convenience.\n\n\
Thank you for being a valued member!\n\n\
Contact us: {phone}";

const DEFAULT_OVERDUE_REMINDER: &str = "Dear {member_name},\n\n\
Your {academy_name} membership payment of \u{20b9}{amount} is overdue by {overdue_days} days.\n\n\
Please make the payment immediately to continue enjoying our facilities.\n\n\
For any queries, contact us: {phone}\n\n\
Thank you!";

#[derive(Clone)]
pub struct TemplateService {
    pool: DatabaseConnection,
}

impl TemplateService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Seed the default reminder texts for any template slot that is empty.
    /// Called once at startup; existing rows are left alone.
    pub async fn ensure_defaults(&self) -> AppResult<()> {
        let defaults = [
            (TemplateType::PaymentReminder, DEFAULT_PAYMENT_REMINDER),
            (TemplateType::OverdueReminder, DEFAULT_OVERDUE_REMINDER),
        ];

        for (template_type, text) in defaults {
            let existing = message_templates::Entity::find()
                .filter(message_templates::Column::TemplateType.eq(template_type))
                .one(&self.pool)
                .await?;
            if existing.is_none() {
                let now = Utc::now();
                message_templates::ActiveModel {
                    template_type: Set(template_type),
                    message_text: Set(text.to_string()),
                    created_at: Set(Some(now)),
                    updated_at: Set(Some(now)),
                    ..Default::default()
                }
                .insert(&self.pool)
                .await?;
                log::info!("Seeded default {template_type} template");
            }
        }
        Ok(())
    }

    pub async fn get_template(&self, template_type: TemplateType) -> AppResult<TemplateResponse> {
        let template = message_templates::Entity::find()
            .filter(message_templates::Column::TemplateType.eq(template_type))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Template {template_type} not found")))?;
        Ok(template.into())
    }

    pub async fn update_template(
        &self,
        template_type: TemplateType,
        req: UpdateTemplateRequest,
    ) -> AppResult<TemplateResponse> {
        if req.message_text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Template text must not be empty".to_string(),
            ));
        }

        let template = message_templates::Entity::find()
            .filter(message_templates::Column::TemplateType.eq(template_type))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Template {template_type} not found")))?;

        let mut model = template.into_active_model();
        model.message_text = Set(req.message_text);
        model.updated_at = Set(Some(Utc::now()));
        let updated = model.update(&self.pool).await?;

        log::info!("Updated {template_type} template");
        Ok(updated.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn setup() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
        opts.max_connections(1);
        let pool = Database::connect(opts).await.unwrap();
        Migrator::up(&pool, None).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn defaults_are_seeded_once() {
        let pool = setup().await;
        let service = TemplateService::new(pool);

        service.ensure_defaults().await.unwrap();
        let payment = service
            .get_template(TemplateType::PaymentReminder)
            .await
            .unwrap();
        assert!(payment.message_text.contains("{member_name}"));
        assert!(payment.message_text.contains("{due_date}"));

        // A second pass must not clobber an operator's edit.
        service
            .update_template(
                TemplateType::PaymentReminder,
                UpdateTemplateRequest {
                    message_text: "Custom: {member_name}".to_string(),
                },
            )
            .await
            .unwrap();
        service.ensure_defaults().await.unwrap();
        let edited = service
            .get_template(TemplateType::PaymentReminder)
            .await
            .unwrap();
        assert_eq!(edited.message_text, "Custom: {member_name}");
    }

    #[tokio::test]
    async fn empty_template_text_is_rejected() {
        let pool = setup().await;
        let service = TemplateService::new(pool);
        service.ensure_defaults().await.unwrap();

        let err = service
            .update_template(
                TemplateType::OverdueReminder,
                UpdateTemplateRequest {
                    message_text: "  ".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}

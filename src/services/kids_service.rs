use crate::entities::{kids_payment_history, kids_training};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{format_phone, validate_phone};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct KidsService {
    pool: DatabaseConnection,
}

impl KidsService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn register_kid(&self, req: RegisterKidRequest) -> AppResult<KidResponse> {
        if req.kid_name.trim().is_empty() || req.parent_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Kid name and parent name are required".to_string(),
            ));
        }
        if req.monthly_fee <= 0.0 {
            return Err(AppError::ValidationError(
                "Monthly fee must be greater than zero".to_string(),
            ));
        }
        if !validate_phone(&req.parent_phone) {
            return Err(AppError::ValidationError(format!(
                "Invalid phone number: {}",
                req.parent_phone
            )));
        }

        let now = Utc::now();
        let kid = kids_training::ActiveModel {
            kid_name: Set(req.kid_name.trim().to_string()),
            parent_name: Set(req.parent_name.trim().to_string()),
            parent_phone: Set(format_phone(&req.parent_phone)),
            age: Set(req.age),
            batch_time: Set(req.batch_time),
            monthly_fee: Set(req.monthly_fee),
            start_date: Set(req.start_date),
            emergency_contact: Set(req.emergency_contact),
            medical_notes: Set(req.medical_notes),
            active: Set(true),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Enrolled kid {} (parent {})", kid.kid_name, kid.parent_name);
        Ok(kid.into())
    }

    /// Active enrollees, ordered by kid name, with optional name search.
    pub async fn list_kids(&self, q: &KidQuery) -> AppResult<Vec<KidResponse>> {
        let mut query = kids_training::Entity::find()
            .filter(kids_training::Column::Active.eq(true))
            .order_by_asc(kids_training::Column::KidName);

        if let Some(term) = q.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(kids_training::Column::KidName.contains(term))
                    .add(kids_training::Column::ParentName.contains(term)),
            );
        }

        let kids = query.all(&self.pool).await?;
        Ok(kids.into_iter().map(KidResponse::from).collect())
    }

    pub async fn update_kid(&self, kid_id: i64, req: UpdateKidRequest) -> AppResult<KidResponse> {
        let kid = kids_training::Entity::find_by_id(kid_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Kid not found".to_string()))?;

        let parent_phone = if let Some(raw) = &req.parent_phone {
            if !validate_phone(raw) {
                return Err(AppError::ValidationError(format!(
                    "Invalid phone number: {raw}"
                )));
            }
            Some(format_phone(raw))
        } else {
            None
        };

        let mut model = kid.into_active_model();
        if let Some(kid_name) = req.kid_name {
            model.kid_name = Set(kid_name);
        }
        if let Some(parent_name) = req.parent_name {
            model.parent_name = Set(parent_name);
        }
        if let Some(phone) = parent_phone {
            model.parent_phone = Set(phone);
        }
        if let Some(age) = req.age {
            model.age = Set(age);
        }
        if let Some(batch_time) = req.batch_time {
            model.batch_time = Set(batch_time);
        }
        if let Some(monthly_fee) = req.monthly_fee {
            model.monthly_fee = Set(monthly_fee);
        }
        if let Some(emergency_contact) = req.emergency_contact {
            model.emergency_contact = Set(Some(emergency_contact));
        }
        if let Some(medical_notes) = req.medical_notes {
            model.medical_notes = Set(Some(medical_notes));
        }
        if let Some(active) = req.active {
            model.active = Set(active);
        }
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// Delete a kid and their payment history, in one transaction.
    pub async fn delete_kid(&self, kid_id: i64) -> AppResult<()> {
        let kid = kids_training::Entity::find_by_id(kid_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Kid not found".to_string()))?;

        let txn = self.pool.begin().await?;
        kids_payment_history::Entity::delete_many()
            .filter(kids_payment_history::Column::KidId.eq(kid_id))
            .exec(&txn)
            .await?;
        kids_training::Entity::delete_by_id(kid_id).exec(&txn).await?;
        txn.commit().await?;

        log::info!("Deleted kid {} and their payment history", kid.kid_name);
        Ok(())
    }

    pub async fn record_kid_payment(
        &self,
        kid_id: i64,
        req: RecordPaymentRequest,
    ) -> AppResult<KidPaymentResponse> {
        if req.amount <= 0.0 {
            return Err(AppError::ValidationError(
                "Amount must be greater than zero".to_string(),
            ));
        }
        kids_training::Entity::find_by_id(kid_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Kid not found".to_string()))?;

        let payment = kids_payment_history::ActiveModel {
            kid_id: Set(kid_id),
            amount: Set(req.amount),
            payment_date: Set(req.payment_date),
            payment_method: Set(req.payment_method),
            notes: Set(req.notes),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(payment.into())
    }

    pub async fn kid_payments(&self, kid_id: i64) -> AppResult<Vec<KidPaymentResponse>> {
        kids_training::Entity::find_by_id(kid_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Kid not found".to_string()))?;

        let payments = kids_payment_history::Entity::find()
            .filter(kids_payment_history::Column::KidId.eq(kid_id))
            .order_by_desc(kids_payment_history::Column::PaymentDate)
            .order_by_desc(kids_payment_history::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(payments.into_iter().map(KidPaymentResponse::from).collect())
    }

    /// Full roster (active and inactive) in stored field order, for export.
    pub async fn export_kids(&self) -> AppResult<Vec<kids_training::Model>> {
        Ok(kids_training::Entity::find()
            .order_by_asc(kids_training::Column::Id)
            .all(&self.pool)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn setup() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
        opts.max_connections(1);
        let pool = Database::connect(opts).await.unwrap();
        Migrator::up(&pool, None).await.unwrap();
        pool
    }

    fn request(kid: &str, parent: &str) -> RegisterKidRequest {
        RegisterKidRequest {
            kid_name: kid.to_string(),
            parent_name: parent.to_string(),
            parent_phone: "9876543210".to_string(),
            age: 8,
            batch_time: "Evening (5:00-6:00 PM)".to_string(),
            monthly_fee: 1000.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            emergency_contact: None,
            medical_notes: None,
        }
    }

    #[tokio::test]
    async fn register_normalizes_parent_phone() {
        let pool = setup().await;
        let service = KidsService::new(pool);

        let kid = service.register_kid(request("Aarav", "Priya")).await.unwrap();
        assert_eq!(kid.parent_phone, "+919876543210");
        assert!(kid.active);
    }

    #[tokio::test]
    async fn list_is_ordered_and_filters_inactive() {
        let pool = setup().await;
        let service = KidsService::new(pool);

        let zara = service.register_kid(request("Zara", "Anil")).await.unwrap();
        service.register_kid(request("Aarav", "Priya")).await.unwrap();
        service
            .update_kid(
                zara.id,
                UpdateKidRequest {
                    kid_name: None,
                    parent_name: None,
                    parent_phone: None,
                    age: None,
                    batch_time: None,
                    monthly_fee: None,
                    emergency_contact: None,
                    medical_notes: None,
                    active: Some(false),
                },
            )
            .await
            .unwrap();

        let kids = service.list_kids(&KidQuery { search: None }).await.unwrap();
        assert_eq!(kids.len(), 1);
        assert_eq!(kids[0].kid_name, "Aarav");
        // Export still sees the deactivated enrollee.
        assert_eq!(service.export_kids().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_kid_cascades_payments() {
        let pool = setup().await;
        let service = KidsService::new(pool.clone());

        let kid = service.register_kid(request("Aarav", "Priya")).await.unwrap();
        service
            .record_kid_payment(
                kid.id,
                RecordPaymentRequest {
                    amount: 1000.0,
                    payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                    payment_method: Some("Cash".to_string()),
                    notes: None,
                },
            )
            .await
            .unwrap();

        service.delete_kid(kid.id).await.unwrap();

        let orphans = kids_payment_history::Entity::find()
            .filter(kids_payment_history::Column::KidId.eq(kid.id))
            .all(&pool)
            .await
            .unwrap();
        assert!(orphans.is_empty());
        let err = service.kid_payments(kid.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

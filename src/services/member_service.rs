use crate::entities::{members, payment_history, reminder_logs};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{format_phone, validate_phone};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct MemberService {
    pool: DatabaseConnection,
}

impl MemberService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Register a member and record the initial payment in one transaction.
    pub async fn register_member(&self, req: CreateMemberRequest) -> AppResult<MemberResponse> {
        if req.name.trim().is_empty() {
            return Err(AppError::ValidationError("Name is required".to_string()));
        }
        if req.amount <= 0.0 {
            return Err(AppError::ValidationError(
                "Amount must be greater than zero".to_string(),
            ));
        }
        if !validate_phone(&req.phone) {
            return Err(AppError::ValidationError(format!(
                "Invalid phone number: {}",
                req.phone
            )));
        }
        let phone = format_phone(&req.phone);

        let existing = members::Entity::find()
            .filter(members::Column::Phone.eq(phone.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(format!(
                "Phone {phone} is already registered"
            )));
        }

        let now = Utc::now();
        let txn = self.pool.begin().await?;

        let member = members::ActiveModel {
            name: Set(req.name.trim().to_string()),
            phone: Set(phone),
            email: Set(req.email),
            membership_type: Set(req.membership_type),
            amount: Set(req.amount),
            payment_date: Set(req.payment_date),
            reminder_days: Set(req.reminder_days.unwrap_or(30)),
            notes: Set(req.notes),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        payment_history::ActiveModel {
            member_id: Set(member.id),
            amount: Set(member.amount),
            payment_date: Set(member.payment_date),
            payment_method: Set(Some("Initial Payment".to_string())),
            notes: Set(Some("Membership registration".to_string())),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!("Registered member {} ({})", member.name, member.phone);
        Ok(member.into())
    }

    /// Search and filter the member roster.
    pub async fn search_members(&self, q: &MemberQuery) -> AppResult<Vec<MemberResponse>> {
        let mut query = members::Entity::find();

        if let Some(term) = q.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(members::Column::Name.contains(term))
                    .add(members::Column::Phone.contains(term))
                    .add(members::Column::Email.contains(term)),
            );
        }
        if let Some(membership_type) = q.membership_type {
            query = query.filter(members::Column::MembershipType.eq(membership_type));
        }

        query = match q.sort_by.unwrap_or(MemberSortKey::Name) {
            MemberSortKey::Name => query.order_by_asc(members::Column::Name),
            MemberSortKey::PaymentDate => query.order_by_desc(members::Column::PaymentDate),
            MemberSortKey::Amount => query.order_by_desc(members::Column::Amount),
        };

        let models = query.all(&self.pool).await?;
        Ok(models.into_iter().map(MemberResponse::from).collect())
    }

    pub async fn update_member(
        &self,
        member_id: i64,
        req: UpdateMemberRequest,
    ) -> AppResult<MemberResponse> {
        let member = members::Entity::find_by_id(member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let phone = if let Some(raw) = &req.phone {
            if !validate_phone(raw) {
                return Err(AppError::ValidationError(format!(
                    "Invalid phone number: {raw}"
                )));
            }
            let normalized = format_phone(raw);
            let taken = members::Entity::find()
                .filter(members::Column::Phone.eq(normalized.clone()))
                .filter(members::Column::Id.ne(member_id))
                .one(&self.pool)
                .await?;
            if taken.is_some() {
                return Err(AppError::ValidationError(format!(
                    "Phone {normalized} is already registered"
                )));
            }
            Some(normalized)
        } else {
            None
        };

        let mut model = member.into_active_model();
        if let Some(name) = req.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationError("Name is required".to_string()));
            }
            model.name = Set(name.trim().to_string());
        }
        if let Some(phone) = phone {
            model.phone = Set(phone);
        }
        if let Some(email) = req.email {
            model.email = Set(Some(email));
        }
        if let Some(membership_type) = req.membership_type {
            model.membership_type = Set(membership_type);
        }
        if let Some(reminder_days) = req.reminder_days {
            if reminder_days < 0 {
                return Err(AppError::ValidationError(
                    "Reminder days must not be negative".to_string(),
                ));
            }
            model.reminder_days = Set(reminder_days);
        }
        if let Some(notes) = req.notes {
            model.notes = Set(Some(notes));
        }
        model.updated_at = Set(Some(Utc::now()));

        let updated = model.update(&self.pool).await?;
        Ok(updated.into())
    }

    /// Delete a member and every dependent row. The cascade is explicit:
    /// payment history and reminder logs first, then the member, in one
    /// transaction so a failure leaves no orphans and no partial delete.
    pub async fn delete_member(&self, member_id: i64) -> AppResult<()> {
        let member = members::Entity::find_by_id(member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let txn = self.pool.begin().await?;

        payment_history::Entity::delete_many()
            .filter(payment_history::Column::MemberId.eq(member_id))
            .exec(&txn)
            .await?;
        reminder_logs::Entity::delete_many()
            .filter(reminder_logs::Column::MemberId.eq(member_id))
            .exec(&txn)
            .await?;
        members::Entity::delete_by_id(member_id).exec(&txn).await?;

        txn.commit().await?;

        log::info!("Deleted member {} ({})", member.name, member.phone);
        Ok(())
    }

    /// Append a payment and roll the member's last-payment fields forward.
    pub async fn record_payment(
        &self,
        member_id: i64,
        req: RecordPaymentRequest,
    ) -> AppResult<PaymentRecordResponse> {
        if req.amount <= 0.0 {
            return Err(AppError::ValidationError(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let member = members::Entity::find_by_id(member_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let now = Utc::now();
        let payment = payment_history::ActiveModel {
            member_id: Set(member_id),
            amount: Set(req.amount),
            payment_date: Set(req.payment_date),
            payment_method: Set(req.payment_method),
            notes: Set(req.notes),
            created_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut model = member.into_active_model();
        model.amount = Set(req.amount);
        model.payment_date = Set(req.payment_date);
        model.updated_at = Set(Some(now));
        model.update(&txn).await?;

        txn.commit().await?;

        log::info!("Recorded payment of {} for member {member_id}", req.amount);
        Ok(payment.into())
    }

    pub async fn payment_history(&self, member_id: i64) -> AppResult<Vec<PaymentRecordResponse>> {
        members::Entity::find_by_id(member_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        let payments = payment_history::Entity::find()
            .filter(payment_history::Column::MemberId.eq(member_id))
            .order_by_desc(payment_history::Column::PaymentDate)
            .order_by_desc(payment_history::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(payments.into_iter().map(PaymentRecordResponse::from).collect())
    }

    /// Latest payments across all members, joined with member names.
    pub async fn recent_payments(&self, limit: u64) -> AppResult<Vec<RecentPaymentResponse>> {
        let payments = payment_history::Entity::find()
            .order_by_desc(payment_history::Column::CreatedAt)
            .order_by_desc(payment_history::Column::Id)
            .limit(limit)
            .all(&self.pool)
            .await?;

        let member_ids: Vec<i64> = payments.iter().map(|p| p.member_id).collect();
        let names: HashMap<i64, String> = members::Entity::find()
            .filter(members::Column::Id.is_in(member_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        Ok(payments
            .into_iter()
            .map(|p| RecentPaymentResponse {
                member_name: names
                    .get(&p.member_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                amount: p.amount,
                payment_date: p.payment_date,
            })
            .collect())
    }

    /// Full member table in stored field order, for export.
    pub async fn export_members(&self) -> AppResult<Vec<members::Model>> {
        Ok(members::Entity::find()
            .order_by_asc(members::Column::Id)
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

    fn request(name: &str, phone: &str) -> CreateMemberRequest {
        CreateMemberRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            membership_type: MembershipType::Monthly,
            amount: 1500.0,
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            reminder_days: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn register_normalizes_phone_and_records_initial_payment() {
        let pool = setup().await;
        let service = MemberService::new(pool.clone());

        let member = service
            .register_member(request("Ravi Kumar", "9876543210"))
            .await
            .unwrap();
        assert_eq!(member.phone, "+919876543210");
        assert_eq!(member.reminder_days, 30);

        let history = service.payment_history(member.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].payment_method.as_deref(), Some("Initial Payment"));
    }

    #[tokio::test]
    async fn duplicate_phone_is_rejected_without_partial_write() {
        let pool = setup().await;
        let service = MemberService::new(pool.clone());

        service
            .register_member(request("Ravi Kumar", "9876543210"))
            .await
            .unwrap();
        let err = service
            .register_member(request("Someone Else", "+919876543210"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let members = service.export_members().await.unwrap();
        assert_eq!(members.len(), 1);
    }

    #[tokio::test]
    async fn invalid_phone_is_rejected() {
        let pool = setup().await;
        let service = MemberService::new(pool);

        let err = service
            .register_member(request("Short Phone", "12345"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn record_payment_rolls_member_forward() {
        let pool = setup().await;
        let service = MemberService::new(pool.clone());

        let member = service
            .register_member(request("Ravi Kumar", "9876543210"))
            .await
            .unwrap();
        service
            .record_payment(
                member.id,
                RecordPaymentRequest {
                    amount: 1600.0,
                    payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                    payment_method: Some("UPI".to_string()),
                    notes: None,
                },
            )
            .await
            .unwrap();

        let updated = service
            .search_members(&MemberQuery {
                search: Some("Ravi".to_string()),
                membership_type: None,
                sort_by: None,
            })
            .await
            .unwrap();
        assert_eq!(updated[0].amount, 1600.0);
        assert_eq!(
            updated[0].payment_date,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert_eq!(service.payment_history(member.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_member_cascades_history_and_reminder_logs() {
        let pool = setup().await;
        let service = MemberService::new(pool.clone());

        let member = service
            .register_member(request("Ravi Kumar", "9876543210"))
            .await
            .unwrap();
        reminder_logs::ActiveModel {
            member_id: Set(member.id),
            reminder_type: Set(TemplateType::PaymentReminder),
            message: Set("test".to_string()),
            success: Set(true),
            sent_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .unwrap();

        service.delete_member(member.id).await.unwrap();

        let orphan_payments = payment_history::Entity::find()
            .filter(payment_history::Column::MemberId.eq(member.id))
            .all(&pool)
            .await
            .unwrap();
        assert!(orphan_payments.is_empty());
        let orphan_logs = reminder_logs::Entity::find()
            .filter(reminder_logs::Column::MemberId.eq(member.id))
            .all(&pool)
            .await
            .unwrap();
        assert!(orphan_logs.is_empty());
        assert!(service.export_members().await.unwrap().is_empty());
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Members {
    Table,
    Id,
    Name,
    Phone,
    Email,
    MembershipType,
    Amount,
    PaymentDate,
    ReminderDays,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PaymentHistory {
    Table,
    Id,
    MemberId,
    Amount,
    PaymentDate,
    PaymentMethod,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum KidsTraining {
    Table,
    Id,
    KidName,
    ParentName,
    ParentPhone,
    Age,
    BatchTime,
    MonthlyFee,
    StartDate,
    EmergencyContact,
    MedicalNotes,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum KidsPaymentHistory {
    Table,
    Id,
    KidId,
    Amount,
    PaymentDate,
    PaymentMethod,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MessageTemplates {
    Table,
    Id,
    TemplateType,
    MessageText,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ReminderLogs {
    Table,
    Id,
    MemberId,
    ReminderType,
    Message,
    Success,
    SentAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Members::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Members::Name).string().not_null())
                    .col(
                        ColumnDef::new(Members::Phone)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Members::Email).string().null())
                    .col(
                        ColumnDef::new(Members::MembershipType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Members::Amount).double().not_null())
                    .col(ColumnDef::new(Members::PaymentDate).date().not_null())
                    .col(
                        ColumnDef::new(Members::ReminderDays)
                            .integer()
                            .not_null()
                            .default(30),
                    )
                    .col(ColumnDef::new(Members::Notes).text().null())
                    .col(
                        ColumnDef::new(Members::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Members::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PaymentHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PaymentHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PaymentHistory::MemberId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentHistory::Amount).double().not_null())
                    .col(
                        ColumnDef::new(PaymentHistory::PaymentDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PaymentHistory::PaymentMethod).string().null())
                    .col(ColumnDef::new(PaymentHistory::Notes).text().null())
                    .col(
                        ColumnDef::new(PaymentHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payment_history_member")
                    .table(PaymentHistory::Table)
                    .col(PaymentHistory::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(KidsTraining::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(KidsTraining::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(KidsTraining::KidName).string().not_null())
                    .col(ColumnDef::new(KidsTraining::ParentName).string().not_null())
                    .col(
                        ColumnDef::new(KidsTraining::ParentPhone)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(KidsTraining::Age).integer().not_null())
                    .col(ColumnDef::new(KidsTraining::BatchTime).string().not_null())
                    .col(ColumnDef::new(KidsTraining::MonthlyFee).double().not_null())
                    .col(ColumnDef::new(KidsTraining::StartDate).date().not_null())
                    .col(
                        ColumnDef::new(KidsTraining::EmergencyContact)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(KidsTraining::MedicalNotes).text().null())
                    .col(
                        ColumnDef::new(KidsTraining::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(KidsTraining::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(KidsTraining::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(KidsPaymentHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(KidsPaymentHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(KidsPaymentHistory::KidId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(KidsPaymentHistory::Amount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(KidsPaymentHistory::PaymentDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(KidsPaymentHistory::PaymentMethod)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(KidsPaymentHistory::Notes).text().null())
                    .col(
                        ColumnDef::new(KidsPaymentHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_kids_payment_history_kid")
                    .table(KidsPaymentHistory::Table)
                    .col(KidsPaymentHistory::KidId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MessageTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MessageTemplates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MessageTemplates::TemplateType)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(MessageTemplates::MessageText)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MessageTemplates::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(MessageTemplates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReminderLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReminderLogs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReminderLogs::MemberId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReminderLogs::ReminderType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReminderLogs::Message).text().not_null())
                    .col(ColumnDef::new(ReminderLogs::Success).boolean().not_null())
                    .col(
                        ColumnDef::new(ReminderLogs::SentAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reminder_logs_member")
                    .table(ReminderLogs::Table)
                    .col(ReminderLogs::MemberId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(ReminderLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(MessageTemplates::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(KidsPaymentHistory::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(KidsTraining::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(PaymentHistory::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Members::Table).to_owned())
            .await?;
        Ok(())
    }
}

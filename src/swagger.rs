use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::member::register_member,
        handlers::member::search_members,
        handlers::member::update_member,
        handlers::member::delete_member,
        handlers::member::record_payment,
        handlers::member::payment_history,
        handlers::kid::register_kid,
        handlers::kid::list_kids,
        handlers::kid::update_kid,
        handlers::kid::delete_kid,
        handlers::kid::record_kid_payment,
        handlers::kid::kid_payments,
        handlers::reminder::pending_reminders,
        handlers::reminder::whatsapp_reminder,
        handlers::reminder::log_reminder,
        handlers::reminder::bulk_messages,
        handlers::template::get_template,
        handlers::template::update_template,
        handlers::dashboard::dashboard_stats,
        handlers::dashboard::recent_payments,
        handlers::export::export_members,
        handlers::export::export_kids,
    ),
    components(
        schemas(
            MembershipType,
            MemberSortKey,
            CreateMemberRequest,
            UpdateMemberRequest,
            MemberResponse,
            RecordPaymentRequest,
            PaymentRecordResponse,
            RecentPaymentResponse,
            RegisterKidRequest,
            UpdateKidRequest,
            KidResponse,
            KidPaymentResponse,
            TemplateType,
            UpdateTemplateRequest,
            TemplateResponse,
            ReminderKind,
            PendingReminder,
            WhatsAppReminderResponse,
            LogReminderRequest,
            ReminderLogResponse,
            BulkMessageRequest,
            BulkMessageLink,
            DashboardStats,
        )
    ),
    tags(
        (name = "member", description = "Member registration and payments"),
        (name = "kids", description = "Kids training enrollment"),
        (name = "reminder", description = "Payment reminders and WhatsApp links"),
        (name = "template", description = "Reminder message templates"),
        (name = "dashboard", description = "Headline stats"),
        (name = "export", description = "Raw data export"),
    ),
    info(
        title = "Academy Backend API",
        version = "1.0.0",
        description = "Membership, payment reminder and WhatsApp messaging API"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

use actix_web::{HttpResponse, ResponseError, Result, web};
use chrono::Utc;
use serde_json::json;

use crate::models::*;
use crate::services::ReminderService;

#[utoipa::path(
    get,
    path = "/reminders/pending",
    tag = "reminder",
    responses(
        (status = 200, description = "Members overdue or inside their reminder window", body = [PendingReminder])
    )
)]
pub async fn pending_reminders(service: web::Data<ReminderService>) -> Result<HttpResponse> {
    let today = Utc::now().date_naive();
    match service.pending_reminders(today).await {
        Ok(reminders) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": reminders
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/reminders/{id}/whatsapp",
    tag = "reminder",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Rendered reminder text and wa.me link", body = WhatsAppReminderResponse),
        (status = 404, description = "Member or template not found"),
        (status = 422, description = "Template contains an unknown placeholder")
    )
)]
pub async fn whatsapp_reminder(
    service: web::Data<ReminderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let today = Utc::now().date_naive();
    match service.whatsapp_reminder(path.into_inner(), today).await {
        Ok(reminder) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": reminder
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/reminders/{id}/log",
    tag = "reminder",
    request_body = LogReminderRequest,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Reminder logged", body = ReminderLogResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn log_reminder(
    service: web::Data<ReminderService>,
    path: web::Path<i64>,
    request: web::Json<LogReminderRequest>,
) -> Result<HttpResponse> {
    match service
        .log_reminder(path.into_inner(), request.into_inner())
        .await
    {
        Ok(entry) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": entry
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/messages/bulk",
    tag = "reminder",
    request_body = BulkMessageRequest,
    responses(
        (status = 200, description = "One wa.me link per member", body = [BulkMessageLink]),
        (status = 400, description = "Empty message")
    )
)]
pub async fn bulk_messages(
    service: web::Data<ReminderService>,
    request: web::Json<BulkMessageRequest>,
) -> Result<HttpResponse> {
    match service.bulk_links(request.into_inner()).await {
        Ok(links) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": links
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn reminder_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reminders")
            .route("/pending", web::get().to(pending_reminders))
            .route("/{id}/whatsapp", web::get().to(whatsapp_reminder))
            .route("/{id}/log", web::post().to(log_reminder)),
    )
    .service(web::scope("/messages").route("/bulk", web::post().to(bulk_messages)));
}

use actix_web::{HttpResponse, ResponseError, Result, web};
use chrono::Utc;
use serde_json::json;

use crate::models::*;
use crate::services::{MemberService, ReminderService};

#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Headline counts", body = DashboardStats)
    )
)]
pub async fn dashboard_stats(service: web::Data<ReminderService>) -> Result<HttpResponse> {
    let today = Utc::now().date_naive();
    match service.dashboard_stats(today).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": stats
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/dashboard/recent-payments",
    tag = "dashboard",
    responses(
        (status = 200, description = "Latest payments across all members", body = [RecentPaymentResponse])
    )
)]
pub async fn recent_payments(service: web::Data<MemberService>) -> Result<HttpResponse> {
    match service.recent_payments(5).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": payments
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn dashboard_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard")
            .route("/stats", web::get().to(dashboard_stats))
            .route("/recent-payments", web::get().to(recent_payments)),
    );
}

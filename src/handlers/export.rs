use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::services::{KidsService, MemberService};

#[utoipa::path(
    get,
    path = "/export/members",
    tag = "export",
    responses(
        (status = 200, description = "Every member row, in insertion order")
    )
)]
pub async fn export_members(service: web::Data<MemberService>) -> Result<HttpResponse> {
    match service.export_members().await {
        Ok(members) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": members
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/export/kids",
    tag = "export",
    responses(
        (status = 200, description = "Every enrollment row, active or not")
    )
)]
pub async fn export_kids(service: web::Data<KidsService>) -> Result<HttpResponse> {
    match service.export_kids().await {
        Ok(kids) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": kids
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn export_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/export")
            .route("/members", web::get().to(export_members))
            .route("/kids", web::get().to(export_kids)),
    );
}

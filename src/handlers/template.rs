use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::error::AppError;
use crate::models::*;
use crate::services::TemplateService;

#[utoipa::path(
    get,
    path = "/templates/{template_type}",
    tag = "template",
    params(("template_type" = String, Path, description = "payment_reminder | overdue_reminder")),
    responses(
        (status = 200, description = "Current template text", body = TemplateResponse),
        (status = 400, description = "Unknown template type")
    )
)]
pub async fn get_template(
    service: web::Data<TemplateService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let Some(template_type) = TemplateType::from_slug(&slug) else {
        return Ok(
            AppError::ValidationError(format!("Unknown template type '{slug}'")).error_response(),
        );
    };
    match service.get_template(template_type).await {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/templates/{template_type}",
    tag = "template",
    request_body = UpdateTemplateRequest,
    params(("template_type" = String, Path, description = "payment_reminder | overdue_reminder")),
    responses(
        (status = 200, description = "Template updated", body = TemplateResponse),
        (status = 400, description = "Unknown template type or empty text")
    )
)]
pub async fn update_template(
    service: web::Data<TemplateService>,
    path: web::Path<String>,
    request: web::Json<UpdateTemplateRequest>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    let Some(template_type) = TemplateType::from_slug(&slug) else {
        return Ok(
            AppError::ValidationError(format!("Unknown template type '{slug}'")).error_response(),
        );
    };
    match service
        .update_template(template_type, request.into_inner())
        .await
    {
        Ok(template) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": template
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn template_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/templates")
            .route("/{template_type}", web::get().to(get_template))
            .route("/{template_type}", web::put().to(update_template)),
    );
}

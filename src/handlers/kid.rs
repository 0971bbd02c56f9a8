use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::KidsService;

#[utoipa::path(
    post,
    path = "/kids",
    tag = "kids",
    request_body = RegisterKidRequest,
    responses(
        (status = 200, description = "Kid enrolled", body = KidResponse),
        (status = 400, description = "Missing field or invalid parent phone")
    )
)]
pub async fn register_kid(
    service: web::Data<KidsService>,
    request: web::Json<RegisterKidRequest>,
) -> Result<HttpResponse> {
    match service.register_kid(request.into_inner()).await {
        Ok(kid) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": kid
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/kids",
    tag = "kids",
    params(
        ("search" = Option<String>, Query, description = "Substring match on kid or parent name")
    ),
    responses(
        (status = 200, description = "Active enrollees ordered by name", body = [KidResponse])
    )
)]
pub async fn list_kids(
    service: web::Data<KidsService>,
    query: web::Query<KidQuery>,
) -> Result<HttpResponse> {
    match service.list_kids(&query.into_inner()).await {
        Ok(kids) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": kids
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/kids/{id}",
    tag = "kids",
    request_body = UpdateKidRequest,
    params(("id" = i64, Path, description = "Kid id")),
    responses(
        (status = 200, description = "Kid updated", body = KidResponse),
        (status = 404, description = "Kid not found")
    )
)]
pub async fn update_kid(
    service: web::Data<KidsService>,
    path: web::Path<i64>,
    request: web::Json<UpdateKidRequest>,
) -> Result<HttpResponse> {
    match service.update_kid(path.into_inner(), request.into_inner()).await {
        Ok(kid) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": kid
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/kids/{id}",
    tag = "kids",
    params(("id" = i64, Path, description = "Kid id")),
    responses(
        (status = 200, description = "Kid and payment history deleted"),
        (status = 404, description = "Kid not found")
    )
)]
pub async fn delete_kid(
    service: web::Data<KidsService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.delete_kid(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Kid deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/kids/{id}/payments",
    tag = "kids",
    request_body = RecordPaymentRequest,
    params(("id" = i64, Path, description = "Kid id")),
    responses(
        (status = 200, description = "Payment recorded", body = KidPaymentResponse),
        (status = 404, description = "Kid not found")
    )
)]
pub async fn record_kid_payment(
    service: web::Data<KidsService>,
    path: web::Path<i64>,
    request: web::Json<RecordPaymentRequest>,
) -> Result<HttpResponse> {
    match service
        .record_kid_payment(path.into_inner(), request.into_inner())
        .await
    {
        Ok(payment) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": payment
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/kids/{id}/payments",
    tag = "kids",
    params(("id" = i64, Path, description = "Kid id")),
    responses(
        (status = 200, description = "Payment history, newest first", body = [KidPaymentResponse]),
        (status = 404, description = "Kid not found")
    )
)]
pub async fn kid_payments(
    service: web::Data<KidsService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.kid_payments(path.into_inner()).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": payments
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn kid_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/kids")
            .route("", web::post().to(register_kid))
            .route("", web::get().to(list_kids))
            .route("/{id}", web::put().to(update_kid))
            .route("/{id}", web::delete().to(delete_kid))
            .route("/{id}/payments", web::post().to(record_kid_payment))
            .route("/{id}/payments", web::get().to(kid_payments)),
    );
}

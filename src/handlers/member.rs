use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::MemberService;

#[utoipa::path(
    post,
    path = "/members",
    tag = "member",
    request_body = CreateMemberRequest,
    responses(
        (status = 200, description = "Member registered", body = MemberResponse),
        (status = 400, description = "Invalid phone, missing field or duplicate phone")
    )
)]
pub async fn register_member(
    service: web::Data<MemberService>,
    request: web::Json<CreateMemberRequest>,
) -> Result<HttpResponse> {
    match service.register_member(request.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "member",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name, phone or email"),
        ("membership_type" = Option<MembershipType>, Query, description = "Filter by tier"),
        ("sort_by" = Option<MemberSortKey>, Query, description = "name | payment_date | amount")
    ),
    responses(
        (status = 200, description = "Matching members", body = [MemberResponse])
    )
)]
pub async fn search_members(
    service: web::Data<MemberService>,
    query: web::Query<MemberQuery>,
) -> Result<HttpResponse> {
    match service.search_members(&query.into_inner()).await {
        Ok(members) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": members
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "member",
    request_body = UpdateMemberRequest,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    service: web::Data<MemberService>,
    path: web::Path<i64>,
    request: web::Json<UpdateMemberRequest>,
) -> Result<HttpResponse> {
    match service
        .update_member(path.into_inner(), request.into_inner())
        .await
    {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "member",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member and dependent rows deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    service: web::Data<MemberService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.delete_member(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Member deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/members/{id}/payments",
    tag = "member",
    request_body = RecordPaymentRequest,
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Payment recorded", body = PaymentRecordResponse),
        (status = 404, description = "Member not found")
    )
)]
pub async fn record_payment(
    service: web::Data<MemberService>,
    path: web::Path<i64>,
    request: web::Json<RecordPaymentRequest>,
) -> Result<HttpResponse> {
    match service
        .record_payment(path.into_inner(), request.into_inner())
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
    path = "/members/{id}/payments",
    tag = "member",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Payment history, newest first", body = [PaymentRecordResponse]),
        (status = 404, description = "Member not found")
    )
)]
pub async fn payment_history(
    service: web::Data<MemberService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match service.payment_history(path.into_inner()).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": payments
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn member_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::post().to(register_member))
            .route("", web::get().to(search_members))
            .route("/{id}", web::put().to(update_member))
            .route("/{id}", web::delete().to(delete_member))
            .route("/{id}/payments", web::post().to(record_payment))
            .route("/{id}/payments", web::get().to(payment_history)),
    );
}

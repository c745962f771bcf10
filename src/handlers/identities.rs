//! Identity 관리 핸들러 (인증 서비스 비공개 리스너)
//!
//! `/user` 스코프 전체가 `AuthMiddleware::admin_only()`로 보호됩니다.
//! 주 호출자는 프로필 서비스의 피어 클라이언트입니다.

use actix_web::{HttpResponse, delete, post, web};
use validator::Validate;

use crate::domain::dto::identities::{CreateIdentityRequest, IdentityResponse};
use crate::domain::dto::response::ApiResponse;
use crate::errors::AppError;
use crate::services::identities::IdentityService;

/// `POST /user/create` → 201, 해시를 뺀 Identity
#[post("/create")]
pub async fn create_identity(
    identity_service: web::Data<IdentityService>,
    payload: web::Json<CreateIdentityRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let identity = identity_service.create_identity(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(IdentityResponse::from(identity))))
}

/// `DELETE /user/{id}` → 200, 삭제된 Identity
///
/// 관리자 Identity는 삭제되지 않고 404가 됩니다.
#[delete("/{identity_id}")]
pub async fn delete_identity(
    identity_service: web::Data<IdentityService>,
    identity_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deleted = identity_service.delete_identity(&identity_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(IdentityResponse::from(deleted))))
}

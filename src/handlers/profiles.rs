//! # Profile HTTP Handlers
//!
//! 프로필 서비스의 `/user` 엔드포인트입니다. 스코프는 `AuthMiddleware::required()`로
//! 보호되고, 역할 확인은 핸들러에서 합니다.
//!
//! | 메서드 | 경로 | 권한 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/user/{id}` | 본인 또는 관리자 | 200 OK |
//! | `POST` | `/user/create` | 관리자 | 201 Created |
//! | `POST` | `/user/{id}/update` | 관리자 | 200 OK |
//! | `DELETE` | `/user/{id}` | 관리자 | 200 OK |

use actix_web::{HttpResponse, delete, get, post, web};
use validator::Validate;

use crate::domain::dto::profiles::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use crate::domain::dto::response::ApiResponse;
use crate::domain::models::AuthenticatedIdentity;
use crate::errors::AppError;
use crate::services::auth::policy;
use crate::services::profiles::ProfileService;

#[get("/{identity_id}")]
pub async fn get_profile(
    identity: AuthenticatedIdentity,
    profile_service: web::Data<ProfileService>,
    identity_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    policy::require_self_or_admin(&identity.claims, &identity_id)?;

    let profile = profile_service.get_profile(&identity_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ProfileResponse::from(profile))))
}

/// 원격 Identity와 프로필을 함께 생성합니다.
#[post("/create")]
pub async fn create_profile(
    identity: AuthenticatedIdentity,
    profile_service: web::Data<ProfileService>,
    payload: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    policy::require_admin(&identity.claims)?;
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("프로필 생성 요청 - 관리자: {}, 사용자명: {}", identity.identity_id(), payload.username);
    let profile = profile_service.create_profile(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(ProfileResponse::from(profile))))
}

#[post("/{identity_id}/update")]
pub async fn update_profile(
    identity: AuthenticatedIdentity,
    profile_service: web::Data<ProfileService>,
    identity_id: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    policy::require_admin(&identity.claims)?;
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let identity_id = identity_id.into_inner();
    let replacement = payload.into_inner().into_profile(&identity_id);
    let profile = profile_service.update_profile(&identity_id, replacement).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ProfileResponse::from(profile))))
}

/// 원격 Identity 삭제가 성공해야 프로필이 삭제됩니다.
#[delete("/{identity_id}")]
pub async fn delete_profile(
    identity: AuthenticatedIdentity,
    profile_service: web::Data<ProfileService>,
    identity_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    policy::require_admin(&identity.claims)?;

    let profile = profile_service.delete_profile(&identity_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ProfileResponse::from(profile))))
}

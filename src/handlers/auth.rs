//! Authentication HTTP Handlers
//!
//! 인증 서비스 공개 리스너의 로그인/토큰 갱신 엔드포인트입니다.
//!
//! - `POST /login` - 사용자명/비밀번호 로그인 (201)
//! - `GET /refresh` - `Authorization: Bearer <refresh token>`으로 액세스 토큰 재발급 (200)

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::dto::identities::LoginRequest;
use crate::domain::dto::response::ApiResponse;
use crate::errors::AppError;
use crate::services::auth::{AuthService, TokenService};

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_data = auth_service.login(&payload.username, &payload.password).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(token_data)))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰은 본문이 아닌 Authorization 헤더로 받습니다.
///
/// # Endpoint
/// `GET /refresh`
#[get("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    auth_service: web::Data<AuthService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization 헤더가 없습니다".to_string()))?;

    let refresh_token = token_service.extract_bearer_token(auth_header)?;
    let token_data = auth_service.refresh(refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(token_data)))
}

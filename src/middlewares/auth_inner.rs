//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::{AuthenticatedIdentity, TokenClaims};
use crate::errors::{AppError, AppResult};
use crate::middlewares::auth_middleware::AccessLevel;
use crate::services::auth::{TokenService, policy};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub level: AccessLevel,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let level = self.level;

        Box::pin(async move {
            let claims = match authorize(&req, level) {
                Ok(claims) => claims,
                Err(err) => {
                    if err.is_auth_failure() {
                        log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    } else {
                        log::error!("인증 처리 에러: {}", err);
                    }
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            log::debug!("인증 성공: ID {} ({})", claims.identity_id, claims.role);
            req.extensions_mut().insert(AuthenticatedIdentity::from(claims));

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 헤더 추출 → 액세스 토큰 검증 → 접근 수준 확인
fn authorize(req: &ServiceRequest, level: AccessLevel) -> AppResult<TokenClaims> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.validate_access_token(token)?;

    match level {
        AccessLevel::Authenticated => {}
        AccessLevel::AdminOnly => policy::require_admin(&claims)?,
    }

    Ok(claims)
}

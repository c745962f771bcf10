//! JWT 인증 미들웨어
//!
//! Bearer 액세스 토큰을 검증하고, 통과한 요청에는 [`AuthenticatedIdentity`]를 붙입니다.
//! 검증에 쓰이는 [`TokenService`](crate::services::auth::TokenService)는
//! `App::app_data(web::Data<TokenService>)`로 등록되어 있어야 합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 스코프가 요구하는 접근 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// 유효한 액세스 토큰이면 역할과 관계없이 통과
    Authenticated,
    /// 관리자 역할만 통과
    AdminOnly,
}

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    level: AccessLevel,
}

impl AuthMiddleware {
    pub fn new(level: AccessLevel) -> Self {
        Self { level }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AccessLevel::Authenticated)
    }

    /// 관리자 전용 미들웨어 생성
    pub fn admin_only() -> Self {
        Self::new(AccessLevel::AdminOnly)
    }

    pub fn level(&self) -> AccessLevel {
        self.level
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            level: self.level,
        }))
    }
}

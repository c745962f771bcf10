use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::entities::Role;
use crate::domain::models::token::TokenClaims;
use crate::errors::AppError;

/// 인증 미들웨어가 검증한 액세스 토큰의 주체
///
/// `AuthMiddleware`가 요청 extensions에 넣어 두면 핸들러에서 추출자로 꺼냅니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedIdentity {
    pub claims: TokenClaims,
}

impl AuthenticatedIdentity {
    pub fn identity_id(&self) -> &str {
        &self.claims.identity_id
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }
}

impl From<TokenClaims> for AuthenticatedIdentity {
    fn from(claims: TokenClaims) -> Self {
        Self { claims }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedIdentity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(
                AppError::Unauthorized("인증되지 않은 요청입니다".to_string()).into(),
            )),
        }
    }
}

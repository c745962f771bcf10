//! 역할 기반 접근 제어
//!
//! 검증이 끝난 클레임만 받는 순수 함수입니다. 토큰 검증 실패는 여기 오기 전에 끝납니다.

use crate::domain::entities::Role;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AppResult};

/// 관리자만 허용
pub fn require_admin(claims: &TokenClaims) -> AppResult<()> {
    match claims.role {
        Role::Admin => Ok(()),
        Role::User => Err(AppError::Unauthorized("admin role required".to_string())),
    }
}

/// 본인 또는 관리자만 허용
pub fn require_self_or_admin(claims: &TokenClaims, target_identity_id: &str) -> AppResult<()> {
    match claims.role {
        Role::Admin => Ok(()),
        Role::User if claims.identity_id == target_identity_id => Ok(()),
        Role::User => Err(AppError::Unauthorized(
            "access limited to the identity owner".to_string(),
        )),
    }
}

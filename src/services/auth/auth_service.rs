//! 로그인과 토큰 갱신
//!
//! 로그인 조회 실패는 원인과 관계없이 "not found"로 통일해 사용자명 존재 여부를
//! 구분할 수 없게 하고, 비밀번호 불일치만 `Unauthorized`로 구분합니다.

use std::sync::Arc;

use log::{info, warn};

use crate::domain::dto::tokens::TokenData;
use crate::errors::{AppError, AppResult};
use crate::repositories::IdentityStore;
use crate::services::auth::{PasswordHasher, TokenService};

pub struct AuthService {
    identities: Arc<dyn IdentityStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(identities: Arc<dyn IdentityStore>, hasher: PasswordHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            identities,
            hasher,
            tokens,
        }
    }

    /// 사용자명/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 조회 실패 (저장소 에러 포함)
    /// * `AppError::Unauthorized` - 비밀번호 불일치
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenData> {
        let identity = self.identities.get_by_username(username).await.map_err(|e| {
            warn!("로그인 대상 조회 실패 - 사용자: {}, 에러: {}", username, e);
            AppError::NotFound(format!("identity with username {} not found", username))
        })?;

        let verify_start = std::time::Instant::now();
        let is_valid = self.hasher.verify(&identity.password_hash, password);
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::Unauthorized("wrong username or password".to_string()));
        }

        let pair = self.tokens.issue_token_pair(&identity.id, identity.role)?;
        info!("🔑 로그인 성공 - 사용자: {}, ID: {}", identity.username, identity.id);

        Ok(TokenData {
            identity_id: identity.id,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// 토큰 발급 이후 역할이 바뀐 경우 서명이 유효해도 거부합니다.
    /// 리프레시 토큰은 그대로 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidToken` / `AppError::TokenExpired` - 토큰 검증 실패
    /// * `AppError::Unauthorized` - Identity 없음 또는 역할 변경
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenData> {
        let claims = self.tokens.validate_refresh_token(refresh_token)?;

        let identity = self
            .identities
            .get_by_id(&claims.identity_id)
            .await
            .map_err(|_| AppError::Unauthorized("identity no longer exists".to_string()))?;

        if identity.role != claims.role {
            warn!(
                "역할 변경된 리프레시 토큰 거부 - ID: {}, 토큰: {}, 현재: {}",
                identity.id, claims.role, identity.role
            );
            return Err(AppError::Unauthorized("role changed since token issuance".to_string()));
        }

        let access_token = self.tokens.issue_access_token(&identity.id, identity.role)?;

        Ok(TokenData {
            identity_id: identity.id,
            access_token,
            refresh_token: refresh_token.to_string(),
        })
    }
}

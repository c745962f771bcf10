//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰(1시간)과 리프레시 토큰(24시간)을 서로 다른 비밀키로 서명합니다.
//! 서명 알고리즘은 HS256 하나만 허용합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::entities::Role;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// 생성 시 받은 [`JwtConfig`]를 그대로 보관하며 이후 변경되지 않습니다.
/// 여러 워커가 `Arc`로 공유합니다.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// 주어진 비밀키와 수명으로 토큰을 서명합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 인코딩 실패
    pub fn issue(&self, identity_id: &str, role: Role, secret: &str, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::InternalError(format!("토큰 만료 시각 계산 실패 (ttl: {})", ttl)))?;
        let claims = TokenClaims {
            identity_id: identity_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 종류에 맞는 비밀키와 수명으로 토큰을 발급합니다.
    pub fn issue_kind(&self, kind: TokenKind, identity_id: &str, role: Role) -> AppResult<String> {
        let (secret, ttl) = self.secret_and_ttl(kind);
        self.issue(identity_id, role, secret, ttl)
    }

    pub fn issue_access_token(&self, identity_id: &str, role: Role) -> AppResult<String> {
        self.issue_kind(TokenKind::Access, identity_id, role)
    }

    pub fn issue_refresh_token(&self, identity_id: &str, role: Role) -> AppResult<String> {
        self.issue_kind(TokenKind::Refresh, identity_id, role)
    }

    /// 액세스 + 리프레시 토큰 쌍 발급
    pub fn issue_token_pair(&self, identity_id: &str, role: Role) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue_access_token(identity_id, role)?,
            refresh_token: self.issue_refresh_token(identity_id, role)?,
        })
    }

    /// 토큰을 검증하고 클레임을 반환합니다. 권한 판단은 하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - `exp`가 지남 (leeway 없음)
    /// * `AppError::InvalidToken` - 서명 불일치, HS256 이외 알고리즘, 클레임 해석 실패
    pub fn validate(&self, token: &str, secret: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken(e.to_string()),
            })
    }

    pub fn validate_kind(&self, kind: TokenKind, token: &str) -> AppResult<TokenClaims> {
        let (secret, _) = self.secret_and_ttl(kind);
        self.validate(token, secret)
    }

    pub fn validate_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.validate_kind(TokenKind::Access, token)
    }

    pub fn validate_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.validate_kind(TokenKind::Refresh, token)
    }

    /// `Authorization: Bearer {token}` 헤더에서 토큰 부분만 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::Unauthorized` - `Bearer ` 접두사가 없거나 토큰이 비어 있음
    pub fn extract_bearer_token<'a>(&self, header: &'a str) -> AppResult<&'a str> {
        header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))
    }

    fn secret_and_ttl(&self, kind: TokenKind) -> (&str, Duration) {
        match kind {
            TokenKind::Access => (self.config.access_secret.as_str(), self.config.access_ttl),
            TokenKind::Refresh => (self.config.refresh_secret.as_str(), self.config.refresh_ttl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&JwtConfig::new("access-secret", "refresh-secret"))
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = service();
        let token = service.issue_access_token("id-1", Role::User).unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.identity_id, "id-1");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_refresh_token_lives_24_hours() {
        let service = service();
        let token = service.issue_refresh_token("id-1", Role::Admin).unwrap();
        let claims = service.validate_refresh_token(&token).unwrap();

        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_token_kinds_are_not_interchangeable() {
        let service = service();
        let access = service.issue_access_token("id-1", Role::User).unwrap();
        let refresh = service.issue_refresh_token("id-1", Role::User).unwrap();

        assert!(matches!(service.validate_refresh_token(&access), Err(AppError::InvalidToken(_))));
        assert!(matches!(service.validate_access_token(&refresh), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = service();
        let token = service.issue("id-1", Role::User, "one", Duration::hours(1)).unwrap();

        assert!(matches!(service.validate(&token, "two"), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_token() {
        let service = service();
        let token = service.issue("id-1", Role::User, "s", Duration::seconds(-5)).unwrap();

        assert!(matches!(service.validate(&token, "s"), Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_overflowing_ttl_is_internal_error() {
        let result = service().issue("id-1", Role::User, "s", Duration::days(365 * 1_000_000));

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let service = service();
        let claims = TokenClaims {
            identity_id: "id-1".to_string(),
            role: Role::Admin,
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"access-secret"),
        )
        .unwrap();

        assert!(matches!(service.validate_access_token(&token), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert!(matches!(
            service().validate_access_token("not.a.jwt"),
            Err(AppError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(matches!(service.extract_bearer_token("abc.def"), Err(AppError::Unauthorized(_))));
        assert!(matches!(service.extract_bearer_token("Bearer "), Err(AppError::Unauthorized(_))));
        assert!(matches!(service.extract_bearer_token("bearer abc"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_token_pair_uses_both_secrets() {
        let service = service();
        let pair = service.issue_token_pair("id-9", Role::User).unwrap();

        assert_eq!(service.validate_access_token(&pair.access_token).unwrap().identity_id, "id-9");
        assert_eq!(service.validate_refresh_token(&pair.refresh_token).unwrap().identity_id, "id-9");
    }
}

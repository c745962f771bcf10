//! JWT 클레임과 토큰 쌍
//!
//! 클레임은 영속되지 않으며 서명된 토큰을 검증할 때마다 다시 만들어집니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Role;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `identity_id`: 토큰 주체
/// - `role`: 발급 시점의 역할
/// - `iat`, `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub identity_id: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// 토큰 종류
///
/// 종류마다 서명 비밀키와 수명이 다릅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// 1시간, API 접근용
    Access,
    /// 24시간, 액세스 토큰 갱신용
    Refresh,
}

/// 로그인 시 함께 발급되는 토큰 쌍
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

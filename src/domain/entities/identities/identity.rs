//! Identity Entity Implementation
//!
//! 인증 서비스가 소유하는 자격 증명 레코드입니다.
//! 비밀번호는 bcrypt 해시로만 보관하며 클라이언트에게 반환되지 않습니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 시드 관리자 계정의 고정 ID
///
/// 프로필 서비스가 피어 호출용 서비스 토큰을 발급할 때도 이 ID를 사용합니다.
pub const ADMIN_IDENTITY_ID: &str = "2OokWa2yDw7yi7o9RpsAl58xuoW";

/// 시드 일반 사용자 계정의 고정 ID
pub const USER_IDENTITY_ID: &str = "2OokWdyzR17GBzVsF6auODTuSxz";

/// 사용자 역할
///
/// 닫힌 열거형이며 직렬화 시 소문자 문자열(`"admin"`, `"user"`)을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 인증 주체 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// 정렬 가능한 전역 고유 ID (MongoDB `_id`)
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자명 (unique)
    pub username: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 역할
    pub role: Role,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}

//! Profile Entity Implementation
//!
//! 프로필 서비스가 소유하는 사용자 프로필입니다.
//! `identity_id`는 인증 서비스의 Identity를 가리키는 외부 참조이자 기본 키입니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity ID (MongoDB `_id`)
    #[serde(rename = "_id")]
    pub identity_id: String,
    pub name: String,
    /// `YYYY-MM-DD` 또는 과거 데이터의 RFC 3339 타임스탬프
    pub date_of_birth: String,
    pub address: String,
}

impl Profile {
    pub fn new(
        identity_id: impl Into<String>,
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            identity_id: identity_id.into(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            address: address.into(),
        }
    }
}

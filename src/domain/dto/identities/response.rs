use serde::{Deserialize, Serialize};

use crate::domain::entities::{Identity, Role};

/// 외부에 노출되는 Identity (비밀번호 해시 제외)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username,
            role: identity.role,
        }
    }
}

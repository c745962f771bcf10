use serde::{Deserialize, Serialize};

use crate::domain::entities::Profile;

/// 외부에 노출되는 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub identity_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub address: String,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            identity_id: profile.identity_id,
            name: profile.name,
            date_of_birth: profile.date_of_birth,
            address: profile.address,
        }
    }
}

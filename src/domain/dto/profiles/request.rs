//! 프로필 서비스 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Profile;
use crate::utils::date_utils::is_valid_date;
use crate::utils::string_utils::validate_not_blank;

/// 프로필 생성 요청 (`POST /user/create`)
///
/// 자격 증명은 인증 서비스로 전달되고 나머지 필드가 프로필이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,
}

impl CreateProfileRequest {
    /// 인증 서비스가 발급한 ID로 프로필 레코드를 만듭니다.
    pub fn to_profile(&self, identity_id: &str) -> Profile {
        Profile::new(identity_id, &self.name, &self.date_of_birth, &self.address)
    }
}

/// 프로필 수정 요청 (`POST /user/{id}/update`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,
}

impl UpdateProfileRequest {
    pub fn into_profile(self, identity_id: &str) -> Profile {
        Profile::new(identity_id, self.name, self.date_of_birth, self.address)
    }
}

/// 생년월일은 `YYYY-MM-DD` 형식만 허용
fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if !is_valid_date(value) {
        return Err(ValidationError::new("invalid_date")
            .with_message("생년월일은 YYYY-MM-DD 형식이어야 합니다".into()));
    }
    Ok(())
}

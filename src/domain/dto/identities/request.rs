//! 인증 서비스 요청 DTO
//!
//! 로그인과 관리자 전용 Identity 생성/수정 요청을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Role;
use crate::utils::string_utils::validate_not_blank;

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// Identity 생성 요청 (`POST /user/create`, 비공개 리스너)
///
/// 프로필 서비스의 피어 클라이언트도 같은 본문을 전송합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIdentityRequest {
    #[validate(
        length(max = 64, message = "사용자명은 64자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// Identity 전체 교체 요청
///
/// `password`가 있으면 다시 해싱하고, 없으면 기존 해시를 유지합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateIdentityRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub username: String,

    #[serde(default)]
    pub password: Option<String>,

    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_rejected() {
        let request = LoginRequest {
            username: "   ".to_string(),
            password: "user".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        let request = CreateIdentityRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_update_request_password_is_optional() {
        let request: UpdateIdentityRequest =
            serde_json::from_str(r#"{"username":"alice","role":"admin"}"#).unwrap();

        assert!(request.password.is_none());
        assert_eq!(request.role, Role::Admin);
        assert!(request.validate().is_ok());
    }
}

//! # 문자열 유틸리티
//!
//! 요청 검증과 설정값 정리에 쓰이는 공통 함수들입니다.

use validator::ValidationError;

/// 빈 문자열이거나 공백만 있는지 확인
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `validator` 커스텀 검증: 필수 문자열 필드
///
/// ```rust,ignore
/// #[validate(custom(function = "validate_not_blank"))]
/// pub name: String,
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("required").with_message("필수 입력값입니다".into()));
    }
    Ok(())
}

/// 피어 서비스 기본 URL 정리
///
/// 앞뒤 공백과 끝의 `/`를 제거하고, 스킴이 없으면 `http://`를 붙입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(normalize_base_url("auth:9001/"), "http://auth:9001");
/// assert_eq!(normalize_base_url("https://auth.local"), "https://auth.local");
/// ```
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

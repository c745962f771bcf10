//! # 날짜 유틸리티
//!
//! 생년월일은 입력 시 `YYYY-MM-DD`로 검증하지만, 저장소에는 과거 데이터로
//! RFC 3339 타임스탬프가 남아 있을 수 있어 조회 시 정규화합니다.

use chrono::{DateTime, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` 형식의 실제 존재하는 날짜인지 확인
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

/// RFC 3339 타임스탬프는 날짜 부분만 남기고, 그 외 값은 그대로 반환
///
/// ```rust,ignore
/// assert_eq!(normalize_date_of_birth("2019-01-01T00:00:00Z"), "2019-01-01");
/// assert_eq!(normalize_date_of_birth("2019-01-01"), "2019-01-01");
/// ```
pub fn normalize_date_of_birth(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(timestamp) => timestamp.format(DATE_FORMAT).to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2019-01-01"));
        assert!(is_valid_date("2000-02-29"));
        assert!(!is_valid_date("2019-02-29"));
        assert!(!is_valid_date("01-01-2019"));
        assert!(!is_valid_date("2019-01-01T00:00:00Z"));
    }

    #[test]
    fn test_rfc3339_is_truncated_to_date() {
        assert_eq!(normalize_date_of_birth("2019-01-01T00:00:00Z"), "2019-01-01");
        // 오프셋은 그대로 두고 로컬 날짜 부분을 사용
        assert_eq!(normalize_date_of_birth("1995-07-14T23:30:00+07:00"), "1995-07-14");
    }

    #[test]
    fn test_other_values_pass_through() {
        assert_eq!(normalize_date_of_birth("2019-01-01"), "2019-01-01");
        assert_eq!(normalize_date_of_birth("not a date"), "not a date");
        assert_eq!(normalize_date_of_birth(""), "");
    }
}

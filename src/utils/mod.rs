//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증, URL 정리
//! - [`date_utils`] - 생년월일 형식 검증과 정규화

pub mod date_utils;
pub mod string_utils;

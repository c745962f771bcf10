//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스와 프로필 서비스가 공유하는 에러 분류입니다.
//! `thiserror`로 메시지를 정의하고 `actix_web::ResponseError`로
//! `{"status": "error", "error_message": ...}` 봉투 응답을 만듭니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn find(store: &dyn IdentityStore, id: &str) -> AppResult<Identity> {
//!     let identity = store.get_by_id(id).await?;
//!     Ok(identity)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::dto::response::ApiResponse;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 그대로 반환되면 상태 코드와 에러 봉투로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 조회 대상이 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 사용자명 중복 (400 Bad Request)
    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    /// 자격 증명 또는 권한 실패 (401 Unauthorized)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 서명은 유효하지만 만료된 토큰 (401 Unauthorized)
    #[error("Token expired")]
    TokenExpired,

    /// 서명/알고리즘/형식이 잘못된 토큰 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 피어 서비스 호출 실패 또는 비성공 봉투 (500 Internal Server Error)
    #[error("Remote service error: {0}")]
    RemoteError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 저장소 에러 (500 Internal Server Error)
    #[error("Store error: {0}")]
    StoreError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 인증 계열 에러인지 확인합니다.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AppError::Unauthorized(_) | AppError::TokenExpired | AppError::InvalidToken(_)
        )
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateUsername(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::TokenExpired | AppError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::RemoteError(_) | AppError::StoreError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러 봉투 JSON 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.to_string()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 저장소 작업 실패를 컨텍스트와 함께 `StoreError`로 변환합니다.
    fn store_context(self, operation: &str, key: &str) -> AppResult<T>;

    /// 클로저로 지연 평가된 컨텍스트를 붙여 `InternalError`로 변환합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn store_context(self, operation: &str, key: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StoreError(format!("{} ({}): {}", operation, key, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

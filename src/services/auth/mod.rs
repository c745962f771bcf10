//! 인증 서비스 계층
//!
//! - [`password_hasher`] - bcrypt 해싱/검증
//! - [`token_service`] - JWT 발급/검증 (HS256)
//! - [`policy`] - 역할 기반 접근 제어 함수
//! - [`auth_service`] - 로그인, 토큰 갱신

pub mod auth_service;
pub mod password_hasher;
pub mod policy;
pub mod token_service;

pub use auth_service::AuthService;
pub use password_hasher::PasswordHasher;
pub use token_service::TokenService;

//! 도메인 모델
//!
//! 영속되지 않는 인증 관련 값 객체들입니다.
//!
//! - [`token`] - JWT 클레임, 토큰 종류, 토큰 쌍
//! - [`auth`] - 요청에 부착되는 인증 주체와 추출자

pub mod auth;
pub mod token;

pub use auth::AuthenticatedIdentity;
pub use token::{TokenClaims, TokenKind, TokenPair};

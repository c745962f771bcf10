//! 외부 서비스 클라이언트
//!
//! - [`identity_client`] - 프로필 서비스 → 인증 서비스 Identity 생성/삭제

pub mod identity_client;

pub use identity_client::{HttpIdentityClient, IdentityClient};

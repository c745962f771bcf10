//! 도메인 계층
//!
//! ```text
//! domain
//! ├── entities  ← Identity, Role, Profile (저장소 레코드)
//! ├── dto       ← 요청/응답 객체와 응답 봉투
//! └── models    ← 토큰 클레임, 인증 주체
//! ```

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::{
    ApiResponse, CreateIdentityRequest, CreateProfileRequest, IdentityResponse, LoginRequest,
    ProfileResponse, TokenData, UpdateIdentityRequest, UpdateProfileRequest,
};
pub use entities::{ADMIN_IDENTITY_ID, Identity, Profile, Role, USER_IDENTITY_ID};
pub use models::{AuthenticatedIdentity, TokenClaims, TokenKind, TokenPair};

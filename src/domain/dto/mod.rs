//! 요청/응답 DTO
//!
//! HTTP 경계에서 사용하는 데이터 전송 객체입니다.
//! 요청 DTO는 `validator`로 검증하고, 응답은 [`response::ApiResponse`] 봉투로 감쌉니다.

pub mod identities;
pub mod profiles;
pub mod response;
pub mod tokens;

pub use identities::{CreateIdentityRequest, IdentityResponse, LoginRequest, UpdateIdentityRequest};
pub use profiles::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
pub use response::ApiResponse;
pub use tokens::TokenData;

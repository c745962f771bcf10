//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 저장소와 클라이언트를 주입받고, `main`에서 한 번 만들어
//! `web::Data`로 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - 로그인, 토큰 발급/검증/갱신 ([`auth`])
//! - Identity 생명주기 관리 ([`identities`])
//! - 프로필 관리와 원격 Identity 보상 삭제 ([`profiles`])

pub mod auth;
pub mod identities;
pub mod profiles;

pub use auth::{AuthService, PasswordHasher, TokenService};
pub use identities::IdentityService;
pub use profiles::ProfileService;

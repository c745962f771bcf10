//! 도메인 엔티티
//!
//! 저장소에 영속되는 레코드들입니다.
//!
//! - [`identities`] - 인증 서비스의 자격 증명 (`identities` 컬렉션)
//! - [`profiles`] - 프로필 서비스의 사용자 프로필 (`profiles` 컬렉션)

pub mod identities;
pub mod profiles;

pub use identities::{ADMIN_IDENTITY_ID, Identity, Role, USER_IDENTITY_ID};
pub use profiles::Profile;

//! Profile 저장소 포트

use async_trait::async_trait;

use crate::domain::entities::Profile;
use crate::errors::{AppError, AppResult};

/// Profile 영속화 인터페이스
///
/// `identity_id`가 기본 키이며, Identity의 생명주기는 관리하지 않습니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 새 프로필 저장. 같은 키가 이미 있으면 `AppError::StoreError`.
    async fn create(&self, profile: Profile) -> AppResult<Profile>;

    async fn get(&self, identity_id: &str) -> AppResult<Profile>;

    /// `profile.identity_id` 레코드를 통째로 교체
    async fn update(&self, profile: Profile) -> AppResult<Profile>;

    /// 기존 레코드를 먼저 읽어 반환하고 삭제합니다. 없으면 `AppError::NotFound`.
    async fn delete(&self, identity_id: &str) -> AppResult<Profile>;

    /// 없을 때만 삽입
    async fn seed(&self, profile: Profile) -> AppResult<()>;
}

pub(crate) fn profile_not_found(identity_id: &str) -> AppError {
    AppError::NotFound(format!("profile {} not found", identity_id))
}

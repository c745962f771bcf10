//! Identity 저장소 포트

use async_trait::async_trait;

use crate::domain::entities::Identity;
use crate::errors::AppResult;

/// Identity 영속화 인터페이스
///
/// 인증 서비스의 유스케이스는 이 trait에만 의존합니다.
/// 구현체: [`super::MongoIdentityStore`], [`super::MemoryIdentityStore`]
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// 새 Identity 저장
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateUsername` - 같은 사용자명이 이미 존재
    /// * `AppError::StoreError` - 저장소 실패
    async fn create(&self, identity: Identity) -> AppResult<Identity>;

    /// ID로 조회 (`AppError::NotFound`)
    async fn get_by_id(&self, id: &str) -> AppResult<Identity>;

    /// 사용자명으로 조회 (`AppError::NotFound`)
    async fn get_by_username(&self, username: &str) -> AppResult<Identity>;

    /// `id` 레코드를 통째로 교체 (`AppError::NotFound`)
    async fn update(&self, id: &str, identity: Identity) -> AppResult<Identity>;

    /// `role == User`인 레코드만 삭제합니다.
    ///
    /// 관리자 ID를 넘기면 아무것도 삭제하지 않고 `AppError::NotFound`를 반환합니다.
    async fn delete(&self, id: &str) -> AppResult<Identity>;

    /// ID 기준으로 없을 때만 삽입합니다. 중복 검사를 거치지 않습니다.
    async fn seed(&self, identity: Identity) -> AppResult<()>;
}

pub(crate) fn identity_not_found(key: &str) -> crate::errors::AppError {
    crate::errors::AppError::NotFound(format!("identity {} not found", key))
}

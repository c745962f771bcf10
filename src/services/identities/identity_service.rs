//! # Identity 유스케이스
//!
//! 인증 서비스 비공개 API(`/user/create`, `/user/{id}`) 뒤에서 동작하는 로직입니다.
//! 비밀번호 해싱과 ID 생성은 여기서만 일어나고, 저장소는 받은 레코드를 그대로 저장합니다.

use std::sync::Arc;

use log::info;
use uuid::Uuid;

use crate::domain::dto::identities::{CreateIdentityRequest, UpdateIdentityRequest};
use crate::domain::entities::{Identity, Role};
use crate::errors::AppResult;
use crate::repositories::IdentityStore;
use crate::services::auth::PasswordHasher;

pub struct IdentityService {
    store: Arc<dyn IdentityStore>,
    hasher: PasswordHasher,
}

impl IdentityService {
    pub fn new(store: Arc<dyn IdentityStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// 새 일반 사용자 Identity 생성
    ///
    /// ID는 시간순 정렬이 가능한 UUID v7이고, 역할은 항상 `User`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateUsername` - 사용자명 중복
    /// * `AppError::InternalError` - 해싱 실패
    pub async fn create_identity(&self, request: CreateIdentityRequest) -> AppResult<Identity> {
        let start_time = std::time::Instant::now();

        let password_hash = self.hasher.hash(&request.password)?;
        let identity = Identity::new(Uuid::now_v7().to_string(), request.username, password_hash, Role::User);

        let created = self.store.create(identity).await?;

        info!("👤 Identity 생성: {} ({}), {:?}", created.username, created.id, start_time.elapsed());
        Ok(created)
    }

    pub async fn get_identity_by_id(&self, id: &str) -> AppResult<Identity> {
        self.store.get_by_id(id).await
    }

    pub async fn get_identity_by_username(&self, username: &str) -> AppResult<Identity> {
        self.store.get_by_username(username).await
    }

    /// 전체 교체. 새 비밀번호가 있으면 다시 해싱합니다.
    pub async fn update_identity(&self, id: &str, request: UpdateIdentityRequest) -> AppResult<Identity> {
        let existing = self.store.get_by_id(id).await?;

        let password_hash = match request.password.as_deref() {
            Some(password) => self.hasher.hash(password)?,
            None => existing.password_hash,
        };

        let replacement = Identity::new(id, request.username, password_hash, request.role);
        self.store.update(id, replacement).await
    }

    /// 일반 사용자 Identity 삭제. 관리자는 `NotFound`로 보호됩니다.
    pub async fn delete_identity(&self, id: &str) -> AppResult<Identity> {
        let deleted = self.store.delete(id).await?;
        info!("🗑️ Identity 삭제: {} ({})", deleted.username, deleted.id);
        Ok(deleted)
    }
}

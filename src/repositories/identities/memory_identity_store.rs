//! 프로세스 내 Identity 저장소
//!
//! `STORAGE_BACKEND=memory`로 MongoDB 없이 실행할 때와 테스트에서 사용합니다.
//! 사용자명 검사와 삽입이 하나의 쓰기 잠금 안에서 일어나므로 중복이 생기지 않습니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::identity_store::{IdentityStore, identity_not_found};
use crate::domain::entities::{Identity, Role};
use crate::errors::{AppError, AppResult};

#[derive(Default)]
pub struct MemoryIdentityStore {
    identities: RwLock<HashMap<String, Identity>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, Identity>>> {
        self.identities
            .read()
            .map_err(|_| AppError::StoreError("identity store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, Identity>>> {
        self.identities
            .write()
            .map_err(|_| AppError::StoreError("identity store lock poisoned".to_string()))
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn create(&self, identity: Identity) -> AppResult<Identity> {
        let mut identities = self.write()?;

        if identities.values().any(|existing| existing.username == identity.username) {
            return Err(AppError::DuplicateUsername(identity.username));
        }
        if identities.contains_key(&identity.id) {
            return Err(AppError::StoreError(format!("identity id {} already exists", identity.id)));
        }

        identities.insert(identity.id.clone(), identity.clone());
        Ok(identity)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Identity> {
        self.read()?.get(id).cloned().ok_or_else(|| identity_not_found(id))
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Identity> {
        self.read()?
            .values()
            .find(|identity| identity.username == username)
            .cloned()
            .ok_or_else(|| identity_not_found(username))
    }

    async fn update(&self, id: &str, mut identity: Identity) -> AppResult<Identity> {
        let mut identities = self.write()?;

        if !identities.contains_key(id) {
            return Err(identity_not_found(id));
        }
        if identities
            .values()
            .any(|existing| existing.id != id && existing.username == identity.username)
        {
            return Err(AppError::DuplicateUsername(identity.username));
        }

        identity.id = id.to_string();
        identities.insert(id.to_string(), identity.clone());
        Ok(identity)
    }

    async fn delete(&self, id: &str) -> AppResult<Identity> {
        let mut identities = self.write()?;

        match identities.get(id).map(|identity| identity.role) {
            Some(Role::User) => identities.remove(id).ok_or_else(|| identity_not_found(id)),
            Some(Role::Admin) | None => Err(identity_not_found(id)),
        }
    }

    async fn seed(&self, identity: Identity) -> AppResult<()> {
        self.write()?.entry(identity.id.clone()).or_insert(identity);
        Ok(())
    }
}

//! 프로세스 내 Profile 저장소

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::profile_store::{ProfileStore, profile_not_found};
use crate::domain::entities::Profile;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, identity_id: &str) -> bool {
        self.read().map(|map| map.contains_key(identity_id)).unwrap_or(false)
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, Profile>>> {
        self.profiles
            .read()
            .map_err(|_| AppError::StoreError("profile store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, Profile>>> {
        self.profiles
            .write()
            .map_err(|_| AppError::StoreError("profile store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn create(&self, profile: Profile) -> AppResult<Profile> {
        let mut profiles = self.write()?;

        if profiles.contains_key(&profile.identity_id) {
            return Err(AppError::StoreError(format!(
                "insert profile ({}): duplicate key",
                profile.identity_id
            )));
        }

        profiles.insert(profile.identity_id.clone(), profile.clone());
        Ok(profile)
    }

    async fn get(&self, identity_id: &str) -> AppResult<Profile> {
        self.read()?
            .get(identity_id)
            .cloned()
            .ok_or_else(|| profile_not_found(identity_id))
    }

    async fn update(&self, profile: Profile) -> AppResult<Profile> {
        let mut profiles = self.write()?;

        match profiles.get_mut(&profile.identity_id) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(profile)
            }
            None => Err(profile_not_found(&profile.identity_id)),
        }
    }

    async fn delete(&self, identity_id: &str) -> AppResult<Profile> {
        self.write()?
            .remove(identity_id)
            .ok_or_else(|| profile_not_found(identity_id))
    }

    async fn seed(&self, profile: Profile) -> AppResult<()> {
        self.write()?.entry(profile.identity_id.clone()).or_insert(profile);
        Ok(())
    }
}

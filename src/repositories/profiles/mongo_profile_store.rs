//! # MongoDB Profile 저장소
//!
//! - **컬렉션명**: `profiles`
//! - **키**: `_id` = identity_id

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::{doc, to_document};

use super::profile_store::{ProfileStore, profile_not_found};
use crate::db::Database;
use crate::domain::entities::Profile;
use crate::errors::{AppResult, ErrorContext};

pub struct MongoProfileStore {
    collection: Collection<Profile>,
}

impl MongoProfileStore {
    pub const COLLECTION: &'static str = "profiles";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Profile>(Self::COLLECTION),
        }
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn create(&self, profile: Profile) -> AppResult<Profile> {
        self.collection
            .insert_one(&profile)
            .await
            .store_context("insert profile", &profile.identity_id)?;

        Ok(profile)
    }

    async fn get(&self, identity_id: &str) -> AppResult<Profile> {
        self.collection
            .find_one(doc! { "_id": identity_id })
            .await
            .store_context("find profile", identity_id)?
            .ok_or_else(|| profile_not_found(identity_id))
    }

    async fn update(&self, profile: Profile) -> AppResult<Profile> {
        let result = self
            .collection
            .replace_one(doc! { "_id": &profile.identity_id }, &profile)
            .await
            .store_context("replace profile", &profile.identity_id)?;

        if result.matched_count == 0 {
            return Err(profile_not_found(&profile.identity_id));
        }
        Ok(profile)
    }

    async fn delete(&self, identity_id: &str) -> AppResult<Profile> {
        let profile = self.get(identity_id).await?;

        self.collection
            .delete_one(doc! { "_id": identity_id })
            .await
            .store_context("delete profile", identity_id)?;

        Ok(profile)
    }

    async fn seed(&self, profile: Profile) -> AppResult<()> {
        let mut fields = to_document(&profile).store_context("encode profile", &profile.identity_id)?;
        fields.remove("_id");

        self.collection
            .update_one(doc! { "_id": &profile.identity_id }, doc! { "$setOnInsert": fields })
            .upsert(true)
            .await
            .store_context("seed profile", &profile.identity_id)?;

        Ok(())
    }
}

//! # MongoDB Identity 저장소
//!
//! - **컬렉션명**: `identities`
//! - **인덱스**: `username` (unique, `username_unique`)
//!
//! 사용자명 중복은 조회 후 삽입으로 먼저 막고, 동시 요청이 그 사이를 통과하면
//! 유니크 인덱스 위반(E11000)을 `DuplicateUsername`으로 변환합니다.

use async_trait::async_trait;
use log::info;
use mongodb::bson::{doc, to_document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::identity_store::{IdentityStore, identity_not_found};
use crate::db::Database;
use crate::domain::entities::{Identity, Role};
use crate::errors::{AppError, AppResult, ErrorContext};

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoIdentityStore {
    collection: Collection<Identity>,
}

impl MongoIdentityStore {
    pub const COLLECTION: &'static str = "identities";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Identity>(Self::COLLECTION),
        }
    }

    /// 사용자명 유니크 인덱스 생성 (이미 있으면 그대로 둠)
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(username_index)
            .await
            .store_context("create index", "username_unique")?;

        info!("📇 identities.username_unique 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn map_write_error(error: MongoError, operation: &str, username: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::DuplicateUsername(username.to_string())
    } else {
        AppError::StoreError(format!("{} ({}): {}", operation, username, error))
    }
}

#[async_trait]
impl IdentityStore for MongoIdentityStore {
    async fn create(&self, identity: Identity) -> AppResult<Identity> {
        let existing = self
            .collection
            .find_one(doc! { "username": &identity.username })
            .await
            .store_context("find identity", &identity.username)?;

        if existing.is_some() {
            return Err(AppError::DuplicateUsername(identity.username));
        }

        self.collection
            .insert_one(&identity)
            .await
            .map_err(|e| map_write_error(e, "insert identity", &identity.username))?;

        Ok(identity)
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Identity> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .store_context("find identity", id)?
            .ok_or_else(|| identity_not_found(id))
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Identity> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .store_context("find identity", username)?
            .ok_or_else(|| identity_not_found(username))
    }

    async fn update(&self, id: &str, mut identity: Identity) -> AppResult<Identity> {
        identity.id = id.to_string();

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &identity)
            .await
            .map_err(|e| map_write_error(e, "replace identity", &identity.username))?;

        if result.matched_count == 0 {
            return Err(identity_not_found(id));
        }
        Ok(identity)
    }

    async fn delete(&self, id: &str) -> AppResult<Identity> {
        self.collection
            .find_one_and_delete(doc! { "_id": id, "role": Role::User.as_str() })
            .await
            .store_context("delete identity", id)?
            .ok_or_else(|| identity_not_found(id))
    }

    async fn seed(&self, identity: Identity) -> AppResult<()> {
        let mut fields = to_document(&identity).store_context("encode identity", &identity.id)?;
        fields.remove("_id");

        self.collection
            .update_one(doc! { "_id": &identity.id }, doc! { "$setOnInsert": fields })
            .upsert(true)
            .await
            .store_context("seed identity", &identity.id)?;

        Ok(())
    }
}

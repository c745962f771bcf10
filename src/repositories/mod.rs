//! 데이터 액세스 계층
//!
//! 저장소는 trait 포트([`IdentityStore`], [`ProfileStore`])로 정의되고,
//! `STORAGE_BACKEND` 설정에 따라 MongoDB 또는 메모리 구현체가 선택됩니다.

pub mod identities;
pub mod profiles;

use std::sync::Arc;

use log::info;

pub use identities::{IdentityStore, MemoryIdentityStore, MongoIdentityStore};
pub use profiles::{MemoryProfileStore, MongoProfileStore, ProfileStore};

use crate::config::{DatabaseConfig, StorageBackend};
use crate::db::Database;
use crate::errors::AppResult;

/// 인증 서비스용 Identity 저장소 생성
///
/// MongoDB 백엔드는 연결 직후 사용자명 유니크 인덱스를 보장합니다.
pub async fn identity_store_from_config(config: &DatabaseConfig) -> AppResult<Arc<dyn IdentityStore>> {
    match config.backend {
        StorageBackend::MongoDb => {
            let database = Database::connect(&config.uri, &config.auth_database, "auth").await?;
            let store = MongoIdentityStore::new(&database);
            store.create_indexes().await?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            info!("🧪 메모리 Identity 저장소 사용 (재시작 시 초기화)");
            Ok(Arc::new(MemoryIdentityStore::new()))
        }
    }
}

/// 프로필 서비스용 Profile 저장소 생성
pub async fn profile_store_from_config(config: &DatabaseConfig) -> AppResult<Arc<dyn ProfileStore>> {
    match config.backend {
        StorageBackend::MongoDb => {
            let database = Database::connect(&config.uri, &config.user_database, "user").await?;
            Ok(Arc::new(MongoProfileStore::new(&database)))
        }
        StorageBackend::Memory => {
            info!("🧪 메모리 Profile 저장소 사용 (재시작 시 초기화)");
            Ok(Arc::new(MemoryProfileStore::new()))
        }
    }
}

//! 시작 시 기본 데이터 적재
//!
//! 두 서비스는 고정 ID를 공유하는 관리자/일반 사용자 한 쌍을 갖고 시작합니다.
//! 이미 있으면 건드리지 않습니다.

use chrono::Local;
use log::info;

use crate::domain::entities::{ADMIN_IDENTITY_ID, Identity, Profile, Role, USER_IDENTITY_ID};
use crate::errors::AppResult;
use crate::repositories::{IdentityStore, ProfileStore};
use crate::services::auth::PasswordHasher;
use crate::utils::date_utils::DATE_FORMAT;

/// 인증 서비스 기본 Identity (`admin`/`admin`, `user`/`user`)
pub async fn seed_identities(store: &dyn IdentityStore, hasher: &PasswordHasher) -> AppResult<()> {
    let seeds = [
        (ADMIN_IDENTITY_ID, "admin", Role::Admin),
        (USER_IDENTITY_ID, "user", Role::User),
    ];

    for (id, username, role) in seeds {
        let password_hash = hasher.hash(username)?;
        store.seed(Identity::new(id, username, password_hash, role)).await?;
    }

    info!("🌱 기본 Identity 적재 완료");
    Ok(())
}

/// 프로필 서비스 기본 프로필
pub async fn seed_profiles(store: &dyn ProfileStore) -> AppResult<()> {
    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();

    store
        .seed(Profile::new(ADMIN_IDENTITY_ID, "Admin", today, "Perawang"))
        .await?;
    store
        .seed(Profile::new(USER_IDENTITY_ID, "User", "2019-01-01", "Malang"))
        .await?;

    info!("🌱 기본 프로필 적재 완료");
    Ok(())
}

//! # 프로필 유스케이스
//!
//! 프로필 생성과 삭제는 인증 서비스의 Identity 생명주기와 묶여 있습니다.
//!
//! ```text
//! create:  원격 Identity 생성 ──► 로컬 프로필 저장 ──(실패)──► 원격 Identity 보상 삭제
//! delete:  로컬 존재 확인 ──► 원격 Identity 삭제 ──► 로컬 프로필 삭제
//! ```
//!
//! 원격 Identity가 남아 있는 동안에는 로컬 프로필을 먼저 지우지 않습니다.

use std::sync::Arc;

use log::{error, info, warn};

use crate::clients::IdentityClient;
use crate::domain::dto::profiles::CreateProfileRequest;
use crate::domain::entities::Profile;
use crate::errors::{AppError, AppResult};
use crate::repositories::ProfileStore;
use crate::utils::date_utils::normalize_date_of_birth;

pub struct ProfileService {
    profiles: Arc<dyn ProfileStore>,
    identity_client: Arc<dyn IdentityClient>,
    compensation_attempts: u32,
}

impl ProfileService {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        identity_client: Arc<dyn IdentityClient>,
        compensation_attempts: u32,
    ) -> Self {
        Self {
            profiles,
            identity_client,
            compensation_attempts: compensation_attempts.max(1),
        }
    }

    /// 원격 Identity와 로컬 프로필을 함께 생성
    ///
    /// # Errors
    ///
    /// * `AppError::RemoteError` - 원격 생성 실패 (로컬 상태 변경 없음)
    /// * `AppError::StoreError` - 로컬 저장 실패 (원격 Identity는 보상 삭제 시도)
    pub async fn create_profile(&self, request: CreateProfileRequest) -> AppResult<Profile> {
        let identity = self
            .identity_client
            .create_remote_identity(&request.username, &request.password)
            .await?;

        let profile = request.to_profile(&identity.id);

        match self.profiles.create(profile).await {
            Ok(created) => {
                info!("📇 프로필 생성: {} ({})", created.name, created.identity_id);
                Ok(created)
            }
            Err(e) => {
                error!("프로필 저장 실패 - ID: {}, 에러: {}", identity.id, e);
                self.compensate_remote_identity(&identity.id).await;
                Err(AppError::StoreError("failed to create profile".to_string()))
            }
        }
    }

    /// 고아가 된 원격 Identity 삭제 재시도
    ///
    /// 첫 성공에서 멈추고, 모두 실패하면 로그만 남깁니다. 성공 여부를 반환합니다.
    pub async fn compensate_remote_identity(&self, identity_id: &str) -> bool {
        for attempt in 1..=self.compensation_attempts {
            match self.identity_client.delete_remote_identity(identity_id).await {
                Ok(_) => {
                    info!("↩️ 원격 Identity 보상 삭제 완료 - ID: {}, 시도: {}", identity_id, attempt);
                    return true;
                }
                Err(e) => warn!(
                    "원격 Identity 보상 삭제 실패 ({}/{}) - ID: {}, 에러: {}",
                    attempt, self.compensation_attempts, identity_id, e
                ),
            }
        }

        error!(
            "❌ 원격 Identity 보상 삭제 포기 - ID: {} ({}회 시도), 수동 정리 필요",
            identity_id, self.compensation_attempts
        );
        false
    }

    pub async fn get_profile(&self, identity_id: &str) -> AppResult<Profile> {
        let profile = self.profiles.get(identity_id).await?;
        Ok(normalized(profile))
    }

    /// 전체 교체. 경로의 ID가 본문보다 우선합니다.
    pub async fn update_profile(&self, identity_id: &str, mut profile: Profile) -> AppResult<Profile> {
        self.profiles.get(identity_id).await?;

        profile.identity_id = identity_id.to_string();
        self.profiles.update(profile).await
    }

    /// 원격 Identity를 먼저 지우고 로컬 프로필을 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 프로필 없음
    /// * `AppError::RemoteError` - 원격 삭제 실패 (프로필 유지)
    pub async fn delete_profile(&self, identity_id: &str) -> AppResult<Profile> {
        self.profiles.get(identity_id).await?;

        self.identity_client.delete_remote_identity(identity_id).await?;

        let deleted = self.profiles.delete(identity_id).await?;
        info!("🗑️ 프로필 삭제: {} ({})", deleted.name, deleted.identity_id);
        Ok(normalized(deleted))
    }
}

fn normalized(mut profile: Profile) -> Profile {
    profile.date_of_birth = normalize_date_of_birth(&profile.date_of_birth);
    profile
}

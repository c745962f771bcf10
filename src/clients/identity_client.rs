//! 인증 서비스(비공개 리스너) 호출 클라이언트
//!
//! 프로필 서비스는 Identity의 생성과 삭제를 직접 하지 않고 피어에게 위임합니다.
//! 모든 호출에는 고정 관리자 ID로 발급한 액세스 토큰이 실리며, 재시도 없이 한 번만 시도합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::PeerServiceConfig;
use crate::domain::dto::identities::{CreateIdentityRequest, IdentityResponse};
use crate::domain::dto::response::ApiResponse;
use crate::domain::entities::{ADMIN_IDENTITY_ID, Role};
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenService;
use crate::utils::string_utils::normalize_base_url;

/// 원격 Identity 생명주기 포트
///
/// 테스트에서는 가짜 구현으로 교체합니다.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// `POST {base}/user/create`
    async fn create_remote_identity(&self, username: &str, password: &str) -> AppResult<IdentityResponse>;

    /// `DELETE {base}/user/{id}`
    async fn delete_remote_identity(&self, identity_id: &str) -> AppResult<IdentityResponse>;
}

/// reqwest 기반 HTTP 어댑터
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: String,
    token_service: Arc<TokenService>,
}

impl HttpIdentityClient {
    pub fn new(config: &PeerServiceConfig, token_service: Arc<TokenService>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            base_url: normalize_base_url(&config.auth_service_private_url),
            token_service,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 피어 호출용 서비스 토큰 (고정 관리자 ID, 관리자 역할)
    fn service_token(&self) -> AppResult<String> {
        self.token_service.issue_access_token(ADMIN_IDENTITY_ID, Role::Admin)
    }

    async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| AppError::RemoteError(format!("응답 해석 실패 (HTTP {}): {}", status, e)))?;

        interpret_envelope(envelope)
    }
}

/// 응답 봉투 해석
///
/// `status == "success"`이고 `data`가 있을 때만 성공입니다.
pub fn interpret_envelope<T>(envelope: ApiResponse<T>) -> AppResult<T> {
    match (envelope.is_success(), envelope.data) {
        (true, Some(data)) => Ok(data),
        (true, None) => Err(AppError::RemoteError("success response without data".to_string())),
        (false, _) => Err(AppError::RemoteError(
            envelope
                .error_message
                .unwrap_or_else(|| format!("unexpected status '{}'", envelope.status)),
        )),
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn create_remote_identity(&self, username: &str, password: &str) -> AppResult<IdentityResponse> {
        let url = format!("{}/user/create", self.base_url);
        debug!("➡️ POST {} (username: {})", url, username);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.service_token()?)
            .json(&CreateIdentityRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!("원격 Identity 생성 요청 실패: {}", e);
                AppError::RemoteError(format!("identity creation request failed: {}", e))
            })?;

        Self::read_envelope(response).await
    }

    async fn delete_remote_identity(&self, identity_id: &str) -> AppResult<IdentityResponse> {
        let url = format!("{}/user/{}", self.base_url, identity_id);
        debug!("➡️ DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(self.service_token()?)
            .send()
            .await
            .map_err(|e| {
                warn!("원격 Identity 삭제 요청 실패: {}", e);
                AppError::RemoteError(format!("identity deletion request failed: {}", e))
            })?;

        Self::read_envelope(response).await
    }
}

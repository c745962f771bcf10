use serde::{Deserialize, Serialize};

/// 로그인/토큰 갱신 응답 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    pub identity_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

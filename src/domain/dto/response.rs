//! 공통 응답 봉투
//!
//! 두 서비스의 모든 JSON 응답과 피어 호출 응답이 같은 모양을 사용합니다.
//!
//! ```json
//! { "status": "success", "data": { ... } }
//! { "status": "error", "error_message": "..." }
//! ```

use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            data: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::success("Healthy")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "success", "data": "Healthy" }));
    }

    #[test]
    fn test_envelope_without_data_deserializes() {
        let parsed: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"status":"error","error_message":"Unauthorized"}"#).unwrap();

        assert!(!parsed.is_success());
        assert!(parsed.data.is_none());
        assert_eq!(parsed.error_message.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_payload_without_default_impl() {
        #[derive(Debug, Deserialize)]
        struct Payload {
            id: String,
        }

        let ok: ApiResponse<Payload> =
            serde_json::from_str(r#"{"status":"success","data":{"id":"abc"}}"#).unwrap();
        assert_eq!(ok.data.map(|p| p.id).as_deref(), Some("abc"));

        let failed: ApiResponse<Payload> =
            serde_json::from_str(r#"{"status":"error","error_message":"boom"}"#).unwrap();
        assert!(failed.data.is_none());
    }
}

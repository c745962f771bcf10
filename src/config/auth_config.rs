//! # Authentication Configuration Module
//!
//! JWT 서명 비밀키와 토큰 수명, 그리고 프로필 서비스가 인증 서비스를
//! 호출할 때 사용하는 피어 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="access-secret"
//! export REFRESH_TOKEN_SECRET="refresh-secret"
//! export ACCESS_TOKEN_TTL_HOURS="1"
//! export REFRESH_TOKEN_TTL_HOURS="24"
//!
//! export AUTH_SERVICE_PRIVATE_URL="http://localhost:9001"
//! export AUTH_SERVICE_TIMEOUT_SECS="5"
//! export COMPENSATION_MAX_ATTEMPTS="5"
//! ```
//!
//! 스테이징/프로덕션에서는 두 비밀키가 반드시 설정되어 있어야 합니다.

use std::time::Duration as StdDuration;

use chrono::Duration;
use log::warn;

use super::{EnvLookup, Environment, env_parse, env_string};
use crate::errors::{AppError, AppResult};

const DEV_ACCESS_SECRET: &str = "dev-access-token-secret";
const DEV_REFRESH_SECRET: &str = "dev-refresh-token-secret";

/// 토큰 수명 상한 (1년)
pub const MAX_TTL_HOURS: i64 = 24 * 365;

/// JWT 토큰 설정
///
/// `TokenService::new`에 명시적으로 전달되며, 이후 변경되지 않습니다.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl JwtConfig {
    pub const DEFAULT_ACCESS_TTL_HOURS: i64 = 1;
    pub const DEFAULT_REFRESH_TTL_HOURS: i64 = 24;

    /// 기본 수명(1시간/24시간)으로 설정을 만듭니다.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::hours(Self::DEFAULT_ACCESS_TTL_HOURS),
            refresh_ttl: Duration::hours(Self::DEFAULT_REFRESH_TTL_HOURS),
        }
    }

    pub fn from_lookup(lookup: EnvLookup<'_>, environment: Environment) -> AppResult<Self> {
        let access_secret = required_secret(lookup, "ACCESS_TOKEN_SECRET", DEV_ACCESS_SECRET, environment)?;
        let refresh_secret =
            required_secret(lookup, "REFRESH_TOKEN_SECRET", DEV_REFRESH_SECRET, environment)?;

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl: ttl_hours(lookup, "ACCESS_TOKEN_TTL_HOURS", Self::DEFAULT_ACCESS_TTL_HOURS),
            refresh_ttl: ttl_hours(lookup, "REFRESH_TOKEN_TTL_HOURS", Self::DEFAULT_REFRESH_TTL_HOURS),
        })
    }
}

// 비밀키가 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"***")
            .field("refresh_secret", &"***")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

fn required_secret(
    lookup: EnvLookup<'_>,
    key: &str,
    dev_default: &str,
    environment: Environment,
) -> AppResult<String> {
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(secret) => Ok(secret),
        None if environment.allows_insecure_defaults() => {
            warn!("⚠️ {} 미설정, 개발용 기본 비밀키 사용", key);
            Ok(dev_default.to_string())
        }
        None => Err(AppError::InternalError(format!("{} must be set", key))),
    }
}

fn ttl_hours(lookup: EnvLookup<'_>, key: &str, default: i64) -> Duration {
    let hours = env_parse(lookup, key, default);
    if hours <= 0 || hours > MAX_TTL_HOURS {
        warn!(
            "{}={} 은(는) 유효 범위(1..={})를 벗어났습니다. 기본값 {} 사용",
            key, hours, MAX_TTL_HOURS, default
        );
        return Duration::hours(default);
    }
    Duration::hours(hours)
}

/// 프로필 서비스 → 인증 서비스(비공개 리스너) 호출 설정
#[derive(Debug, Clone)]
pub struct PeerServiceConfig {
    pub auth_service_private_url: String,
    /// 요청 1회당 타임아웃
    pub timeout: StdDuration,
    /// 보상 삭제 최대 시도 횟수 (최소 1)
    pub compensation_attempts: u32,
}

impl PeerServiceConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
    pub const DEFAULT_COMPENSATION_ATTEMPTS: u32 = 5;

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            auth_service_private_url: env_string(lookup, "AUTH_SERVICE_PRIVATE_URL", "http://localhost:9001"),
            timeout: StdDuration::from_secs(
                env_parse(lookup, "AUTH_SERVICE_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS).max(1),
            ),
            compensation_attempts: env_parse(
                lookup,
                "COMPENSATION_MAX_ATTEMPTS",
                Self::DEFAULT_COMPENSATION_ATTEMPTS,
            )
            .max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_production_requires_secrets() {
        let lookup = lookup_from(&[("ACCESS_TOKEN_SECRET", "a")]);
        let result = JwtConfig::from_lookup(&lookup, Environment::Production);

        assert!(matches!(result, Err(AppError::InternalError(msg)) if msg.contains("REFRESH_TOKEN_SECRET")));
    }

    #[test]
    fn test_development_uses_default_secrets() {
        let lookup = lookup_from(&[]);
        let config = JwtConfig::from_lookup(&lookup, Environment::Development).unwrap();

        assert_eq!(config.access_secret, DEV_ACCESS_SECRET);
        assert_ne!(config.access_secret, config.refresh_secret);
        assert_eq!(config.access_ttl, Duration::hours(1));
        assert_eq!(config.refresh_ttl, Duration::hours(24));
    }

    #[test]
    fn test_ttl_override_and_invalid_ttl() {
        let lookup = lookup_from(&[
            ("ACCESS_TOKEN_SECRET", "a"),
            ("REFRESH_TOKEN_SECRET", "r"),
            ("ACCESS_TOKEN_TTL_HOURS", "2"),
            ("REFRESH_TOKEN_TTL_HOURS", "-3"),
        ]);
        let config = JwtConfig::from_lookup(&lookup, Environment::Production).unwrap();

        assert_eq!(config.access_ttl, Duration::hours(2));
        assert_eq!(config.refresh_ttl, Duration::hours(24));
    }

    #[test]
    fn test_oversized_ttl_falls_back_to_default() {
        let lookup = lookup_from(&[
            ("ACCESS_TOKEN_SECRET", "a"),
            ("REFRESH_TOKEN_SECRET", "r"),
            ("ACCESS_TOKEN_TTL_HOURS", "100000000000"),
            ("REFRESH_TOKEN_TTL_HOURS", "8760"),
        ]);
        let config = JwtConfig::from_lookup(&lookup, Environment::Production).unwrap();

        assert_eq!(config.access_ttl, Duration::hours(1));
        assert_eq!(config.refresh_ttl, Duration::hours(MAX_TTL_HOURS));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = JwtConfig::new("top-secret-access", "top-secret-refresh");
        let printed = format!("{:?}", config);

        assert!(!printed.contains("top-secret"));
    }

    #[test]
    fn test_peer_defaults() {
        let lookup = lookup_from(&[]);
        let peer = PeerServiceConfig::from_lookup(&lookup);

        assert_eq!(peer.auth_service_private_url, "http://localhost:9001");
        assert_eq!(peer.timeout, StdDuration::from_secs(5));
        assert_eq!(peer.compensation_attempts, 5);
    }

    #[test]
    fn test_compensation_attempts_at_least_one() {
        let lookup = lookup_from(&[("COMPENSATION_MAX_ATTEMPTS", "0")]);
        assert_eq!(PeerServiceConfig::from_lookup(&lookup).compensation_attempts, 1);
    }
}

//! # Configuration Module
//!
//! 두 서비스의 설정을 하나의 [`AppConfig`] 값으로 모읍니다.
//! 시작 시 한 번 환경 변수에서 읽어 각 컴포넌트 생성자에 명시적으로 전달하며,
//! 전역 상태로 보관하지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, 비밀번호 해싱
//! - [`auth_config`] - JWT 비밀키/수명, 피어 서비스 호출
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AppConfig, ServiceKind};
//!
//! let config = AppConfig::from_env()?;
//! let token_service = TokenService::new(&config.jwt);
//! ```
//!
//! 테스트에서는 `from_lookup`에 `HashMap` 기반 클로저를 넘겨 프로세스 환경을
//! 건드리지 않고 설정을 만듭니다.

pub mod auth_config;
pub mod data_config;

use std::fmt::Display;
use std::str::FromStr;

use log::warn;

pub use auth_config::{JwtConfig, PeerServiceConfig};
pub use data_config::{DatabaseConfig, Environment, PasswordConfig, ServerConfig, StorageBackend};

use crate::errors::{AppError, AppResult};

/// 환경 변수 조회 함수
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub(crate) fn env_string(lookup: EnvLookup<'_>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn env_parse<T>(lookup: EnvLookup<'_>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
                default
            }
        },
    }
}

pub(crate) fn env_list(lookup: EnvLookup<'_>, key: &str, default: &[&str]) -> Vec<String> {
    let values: Vec<String> = lookup(key)
        .unwrap_or_default()
        .split(',')
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        default.iter().map(|value| value.to_string()).collect()
    } else {
        values
    }
}

/// 실행할 서비스
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// 인증 서비스 (공개 + 비공개 리스너)
    Auth,
    /// 사용자 프로필 서비스
    User,
}

impl ServiceKind {
    pub fn from_name(name: &str) -> AppResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "auth" => Ok(ServiceKind::Auth),
            "user" => Ok(ServiceKind::User),
            other => Err(AppError::ValidationError(format!(
                "알 수 없는 서비스 '{}' (auth 또는 user)",
                other
            ))),
        }
    }

    /// 첫 번째 CLI 인자를 우선하고, 없으면 `APP_NAME` 값을 사용합니다.
    pub fn resolve(cli_arg: Option<String>, app_name: Option<String>) -> AppResult<Self> {
        match cli_arg.or(app_name) {
            Some(name) => Self::from_name(&name),
            None => Err(AppError::ValidationError(
                "실행할 서비스를 지정하세요: user_login_backend <auth|user> 또는 APP_NAME".to_string(),
            )),
        }
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub peer: PeerServiceConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> AppResult<Self> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            jwt: JwtConfig::from_lookup(lookup, environment)?,
            password: PasswordConfig::from_lookup(lookup, environment),
            peer: PeerServiceConfig::from_lookup(lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_service_kind_resolution() {
        assert_eq!(ServiceKind::resolve(Some("auth".into()), None).unwrap(), ServiceKind::Auth);
        assert_eq!(ServiceKind::resolve(None, Some("USER".into())).unwrap(), ServiceKind::User);
        // CLI 인자가 APP_NAME보다 우선
        assert_eq!(
            ServiceKind::resolve(Some("user".into()), Some("auth".into())).unwrap(),
            ServiceKind::User
        );
        assert!(ServiceKind::resolve(None, None).is_err());
        assert!(ServiceKind::resolve(Some("billing".into()), None).is_err());
    }

    #[test]
    fn test_app_config_from_lookup() {
        let map: HashMap<&str, &str> = HashMap::from([
            ("ENVIRONMENT", "test"),
            ("STORAGE_BACKEND", "memory"),
            ("COMPENSATION_MAX_ATTEMPTS", "3"),
        ]);
        let lookup = |key: &str| map.get(key).map(|v| v.to_string());
        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.password.bcrypt_cost, 4);
        assert_eq!(config.peer.compensation_attempts, 3);
    }

    #[test]
    fn test_env_list_parsing() {
        let lookup = |key: &str| (key == "ORIGINS").then(|| " http://a , ,http://b ".to_string());

        assert_eq!(env_list(&lookup, "ORIGINS", &["x"]), vec!["http://a", "http://b"]);
        assert_eq!(env_list(&lookup, "MISSING", &["x"]), vec!["x"]);
    }
}

//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 리스너 포트, 저장소, 비밀번호 해싱 설정을 관리합니다.

use super::{EnvLookup, env_list, env_parse, env_string};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값으로 실행 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self::from_name(&env_string(lookup, "ENVIRONMENT", "production"))
    }

    /// 환경 이름 문자열 (대소문자 무관). 알 수 없는 값은 `Production`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발용 기본값(비밀키 등)을 허용하는 환경인지 확인
    pub fn allows_insecure_defaults(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB (기본값)
    MongoDb,
    /// 프로세스 내 메모리 저장소 (로컬 실행용, 재시작 시 초기화)
    Memory,
}

impl StorageBackend {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

/// 서버 바인딩 설정
///
/// | 변수 | 기본값 |
/// |------|--------|
/// | `HOST` | `0.0.0.0` |
/// | `AUTH_PUBLIC_PORT` | `9000` |
/// | `AUTH_PRIVATE_PORT` | `9001` |
/// | `USER_SERVICE_PORT` | `8000` |
/// | `HTTP_WORKERS` | `4` |
/// | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000` (쉼표 구분) |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub auth_public_port: u16,
    pub auth_private_port: u16,
    pub user_service_port: u16,
    pub workers: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            host: env_string(lookup, "HOST", "0.0.0.0"),
            auth_public_port: env_parse(lookup, "AUTH_PUBLIC_PORT", 9000),
            auth_private_port: env_parse(lookup, "AUTH_PRIVATE_PORT", 9001),
            user_service_port: env_parse(lookup, "USER_SERVICE_PORT", 8000),
            workers: env_parse(lookup, "HTTP_WORKERS", 4usize).max(1),
            cors_allowed_origins: env_list(lookup, "CORS_ALLOWED_ORIGINS", &["http://localhost:3000"]),
        }
    }
}

/// 저장소 연결 설정
///
/// 두 서비스는 각자의 데이터베이스를 사용합니다.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub uri: String,
    /// 인증 서비스 데이터베이스 (`identities` 컬렉션)
    pub auth_database: String,
    /// 프로필 서비스 데이터베이스 (`profiles` 컬렉션)
    pub user_database: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            backend: StorageBackend::from_name(&env_string(lookup, "STORAGE_BACKEND", "mongodb")),
            uri: env_string(lookup, "MONGODB_URI", "mongodb://localhost:27017"),
            auth_database: env_string(lookup, "AUTH_DATABASE_NAME", "user_login_auth"),
            user_database: env_string(lookup, "USER_DATABASE_NAME", "user_login_profile"),
        }
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// `BCRYPT_COST`가 4-15 범위면 사용하고, 아니면 환경별 기본값을 사용합니다.
    pub fn from_lookup(lookup: EnvLookup<'_>, environment: Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(environment));

        Self { bcrypt_cost }
    }

    /// 환경별 bcrypt cost
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(environment: Environment) -> u32 {
        match environment {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

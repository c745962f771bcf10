//! 사용자 로그인 백엔드
//!
//! 하나의 JWT Identity 모델을 공유하는 두 개의 actix-web 서비스입니다.
//!
//! # Features
//!
//! - **인증 서비스**: 로그인, 액세스/리프레시 토큰 발급과 갱신, 관리자 전용 Identity API
//! - **프로필 서비스**: 프로필 CRUD, 원격 Identity 생성/삭제와 보상 삭제
//! - **저장소**: MongoDB 또는 프로세스 내 메모리 백엔드
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐          ┌─────────────────┐
//! │  Auth Service   │◄─────────│  User Service   │  (HttpIdentityClient,
//! │ :9000  / :9001  │  Bearer  │      :8000      │   관리자 서비스 토큰)
//! └─────────────────┘          └─────────────────┘
//!          │                            │
//!          ▼                            ▼
//! ┌─────────────────┐          ┌─────────────────┐
//! │  IdentityStore  │          │  ProfileStore   │
//! └─────────────────┘          └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_login_backend::config::JwtConfig;
//! use user_login_backend::services::TokenService;
//!
//! let tokens = TokenService::new(&JwtConfig::new("access-secret", "refresh-secret"));
//! let pair = tokens.issue_token_pair(identity_id, Role::User)?;
//! ```

pub mod clients;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;
pub mod utils;

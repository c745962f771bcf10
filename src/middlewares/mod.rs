//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증
//! - 관리자 전용 스코프의 역할 확인
//! - 인증 주체를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::AuthMiddleware;
//!
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/user")
//!             .wrap(AuthMiddleware::admin_only())
//!             .service(handlers::identities::create_identity)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::{AccessLevel, AuthMiddleware};

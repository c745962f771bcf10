//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 서비스는 `web::Data`로 주입되고, 에러는 `AppError`로 반환하면
//! 상태 코드와 `{"status": "error", ...}` 봉투로 변환됩니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Peer service / API Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - Bearer 토큰 검증                ← Web Layer
//!   Handlers (이 모듈) - 입력 검증, 역할 확인
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Stores / Clients - 저장소, 피어 호출            ← Data Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`health`**: `GET /` 헬스체크 (세 리스너 공통)
//! - **`auth`**: 로그인, 토큰 갱신 (인증 서비스 공개 리스너)
//! - **`identities`**: Identity 생성/삭제 (인증 서비스 비공개 리스너)
//! - **`profiles`**: 프로필 CRUD (프로필 서비스)

pub mod auth;
pub mod health;
pub mod identities;
pub mod profiles;

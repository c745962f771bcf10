//! API 라우트 설정 모듈
//!
//! 세 리스너의 엔드포인트를 각각 구성합니다. 서비스 인스턴스는 `main`에서
//! `app_data`로 등록하고, 여기서는 경로와 미들웨어만 연결합니다.
//!
//! | 리스너 | 기본 포트 | 함수 |
//! |--------|-----------|------|
//! | 인증 서비스 공개 | 9000 | [`configure_auth_public_routes`] |
//! | 인증 서비스 비공개 | 9001 | [`configure_auth_private_routes`] |
//! | 프로필 서비스 | 8000 | [`configure_user_service_routes`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(token_service.clone())
//!     .app_data(auth_service.clone())
//!     .configure(configure_auth_public_routes);
//! ```

use actix_web::web;

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// JSON 본문 파싱 실패를 400 에러 봉투로 변환
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 인증 서비스 공개 리스너
///
/// - `GET /` - 헬스체크
/// - `POST /login` - 로그인
/// - `GET /refresh` - 토큰 갱신
pub fn configure_auth_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::health::health_check)
        .service(handlers::auth::login)
        .service(handlers::auth::refresh);
}

/// 인증 서비스 비공개 리스너 (관리자 토큰 필요)
///
/// - `GET /` - 헬스체크
/// - `POST /user/create` - Identity 생성
/// - `DELETE /user/{id}` - Identity 삭제
pub fn configure_auth_private_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::health::health_check)
        .service(
            web::scope("/user")
                .wrap(AuthMiddleware::admin_only())
                .service(handlers::identities::create_identity)
                .service(handlers::identities::delete_identity),
        );
}

/// 프로필 서비스 리스너 (액세스 토큰 필요, 역할은 핸들러에서 확인)
///
/// - `GET /` - 헬스체크
/// - `GET /user/{id}` - 프로필 조회
/// - `POST /user/create` - 프로필 생성
/// - `POST /user/{id}/update` - 프로필 수정
/// - `DELETE /user/{id}` - 프로필 삭제
pub fn configure_user_service_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::health::health_check)
        .service(
            web::scope("/user")
                .wrap(AuthMiddleware::required())
                .service(handlers::profiles::create_profile)
                .service(handlers::profiles::get_profile)
                .service(handlers::profiles::update_profile)
                .service(handlers::profiles::delete_profile),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use crate::clients::IdentityClient;
    use crate::config::JwtConfig;
    use crate::domain::dto::identities::{CreateIdentityRequest, IdentityResponse};
    use crate::domain::entities::{ADMIN_IDENTITY_ID, Role, USER_IDENTITY_ID};
    use crate::errors::AppResult;
    use crate::repositories::{IdentityStore, MemoryIdentityStore, MemoryProfileStore};
    use crate::seed::{seed_identities, seed_profiles};
    use crate::services::{AuthService, IdentityService, PasswordHasher, ProfileService, TokenService};

    /// HTTP 없이 같은 프로세스의 IdentityService로 위임하는 피어 클라이언트
    struct InProcessIdentityClient {
        identities: Arc<IdentityService>,
    }

    #[async_trait]
    impl IdentityClient for InProcessIdentityClient {
        async fn create_remote_identity(&self, username: &str, password: &str) -> AppResult<IdentityResponse> {
            let request = CreateIdentityRequest {
                username: username.to_string(),
                password: password.to_string(),
            };
            self.identities
                .create_identity(request)
                .await
                .map(IdentityResponse::from)
                .map_err(|e| AppError::RemoteError(e.to_string()))
        }

        async fn delete_remote_identity(&self, identity_id: &str) -> AppResult<IdentityResponse> {
            self.identities
                .delete_identity(identity_id)
                .await
                .map(IdentityResponse::from)
                .map_err(|e| AppError::RemoteError(e.to_string()))
        }
    }

    struct Fixture {
        tokens: web::Data<TokenService>,
        identity_store: Arc<MemoryIdentityStore>,
        auth_service: web::Data<AuthService>,
        identity_service: web::Data<IdentityService>,
        profile_service: web::Data<ProfileService>,
    }

    async fn fixture() -> Fixture {
        let hasher = PasswordHasher::new(4);
        let tokens = Arc::new(TokenService::new(&JwtConfig::new("access", "refresh")));

        let identity_store = Arc::new(MemoryIdentityStore::new());
        seed_identities(identity_store.as_ref(), &hasher).await.unwrap();
        let profile_store = Arc::new(MemoryProfileStore::new());
        seed_profiles(profile_store.as_ref()).await.unwrap();

        let identity_service = Arc::new(IdentityService::new(identity_store.clone(), hasher));
        let client = Arc::new(InProcessIdentityClient {
            identities: identity_service.clone(),
        });

        Fixture {
            tokens: web::Data::from(tokens.clone()),
            identity_store: identity_store.clone(),
            auth_service: web::Data::new(AuthService::new(identity_store, hasher, tokens)),
            identity_service: web::Data::from(identity_service),
            profile_service: web::Data::new(ProfileService::new(profile_store, client, 5)),
        }
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    #[actix_web::test]
    async fn test_health_is_plain_text() {
        let app = test::init_service(App::new().configure(configure_auth_public_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "Healthy");
    }

    #[actix_web::test]
    async fn test_login_returns_created_token_data() {
        let f = fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.auth_service.clone())
                .configure(configure_auth_public_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "user", "password": "user" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["identity_id"], USER_IDENTITY_ID);
        assert!(body["data"]["access_token"].is_string());
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_401_envelope() {
        let f = fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.auth_service.clone())
                .configure(configure_auth_public_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "user", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_malformed_body_is_400() {
        let f = fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.auth_service.clone())
                .configure(configure_auth_public_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "  ", "password": "user" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_refresh_via_header() {
        let f = fixture().await;
        let refresh = f.tokens.issue_refresh_token(USER_IDENTITY_ID, Role::User).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.auth_service.clone())
                .configure(configure_auth_public_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/refresh").insert_header(bearer(&refresh)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["refresh_token"], refresh.as_str());

        let req = test::TestRequest::get().uri("/refresh").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_private_create_and_delete_identity() {
        let f = fixture().await;
        let admin = f.tokens.issue_access_token(ADMIN_IDENTITY_ID, Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.identity_service.clone())
                .configure(configure_auth_private_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user/create")
            .insert_header(bearer(&admin))
            .set_json(json!({ "username": "alice", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["role"], "user");
        assert!(body["data"].get("password_hash").is_none());
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/user/{}", id))
            .insert_header(bearer(&admin))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        assert!(f.identity_store.get_by_username("alice").await.is_err());
    }

    #[actix_web::test]
    async fn test_private_rejects_user_token_and_protects_admin() {
        let f = fixture().await;
        let user = f.tokens.issue_access_token(USER_IDENTITY_ID, Role::User).unwrap();
        let admin = f.tokens.issue_access_token(ADMIN_IDENTITY_ID, Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.identity_service.clone())
                .configure(configure_auth_private_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/user/{}", USER_IDENTITY_ID))
            .insert_header(bearer(&user))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::delete()
            .uri(&format!("/user/{}", ADMIN_IDENTITY_ID))
            .insert_header(bearer(&admin))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        assert!(f.identity_store.get_by_id(ADMIN_IDENTITY_ID).await.is_ok());
    }

    #[actix_web::test]
    async fn test_profile_access_is_self_or_admin() {
        let f = fixture().await;
        let user = f.tokens.issue_access_token(USER_IDENTITY_ID, Role::User).unwrap();
        let admin = f.tokens.issue_access_token(ADMIN_IDENTITY_ID, Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.profile_service.clone())
                .configure(configure_user_service_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/user/{}", USER_IDENTITY_ID))
            .insert_header(bearer(&user))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["address"], "Malang");

        let req = test::TestRequest::get()
            .uri(&format!("/user/{}", ADMIN_IDENTITY_ID))
            .insert_header(bearer(&user))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri(&format!("/user/{}", USER_IDENTITY_ID))
            .insert_header(bearer(&admin))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(&format!("/user/{}", USER_IDENTITY_ID)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_profile_lifecycle_through_peer() {
        let f = fixture().await;
        let admin = f.tokens.issue_access_token(ADMIN_IDENTITY_ID, Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.profile_service.clone())
                .configure(configure_user_service_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/user/create")
            .insert_header(bearer(&admin))
            .set_json(json!({
                "username": "alice",
                "password": "secret",
                "name": "Alice",
                "date_of_birth": "1990-05-17",
                "address": "Jakarta"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["identity_id"].as_str().unwrap().to_string();
        assert!(f.identity_store.get_by_id(&id).await.is_ok());

        let req = test::TestRequest::post()
            .uri(&format!("/user/{}/update", id))
            .insert_header(bearer(&admin))
            .set_json(json!({ "name": "Alicia", "date_of_birth": "1990-05-18", "address": "Bandung" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Alicia");
        assert_eq!(body["data"]["identity_id"], id.as_str());

        let req = test::TestRequest::delete()
            .uri(&format!("/user/{}", id))
            .insert_header(bearer(&admin))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        assert!(f.identity_store.get_by_id(&id).await.is_err());
    }

    #[actix_web::test]
    async fn test_profile_writes_require_admin_and_valid_date() {
        let f = fixture().await;
        let user = f.tokens.issue_access_token(USER_IDENTITY_ID, Role::User).unwrap();
        let admin = f.tokens.issue_access_token(ADMIN_IDENTITY_ID, Role::Admin).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(f.tokens.clone())
                .app_data(f.profile_service.clone())
                .configure(configure_user_service_routes),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/user/{}", USER_IDENTITY_ID))
            .insert_header(bearer(&user))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri(&format!("/user/{}/update", USER_IDENTITY_ID))
            .insert_header(bearer(&admin))
            .set_json(json!({ "name": "User", "date_of_birth": "17/05/1990", "address": "Malang" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }
}

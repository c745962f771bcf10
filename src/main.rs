//! 사용자 로그인 백엔드 메인 애플리케이션
//!
//! 첫 번째 CLI 인자(또는 `APP_NAME`)로 실행할 서비스를 고릅니다.
//!
//! ```bash
//! user_login_backend auth   # 공개(9000) + 비공개(9001) 리스너
//! user_login_backend user   # 프로필 서비스(8000)
//! ```

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_login_backend::clients::{HttpIdentityClient, IdentityClient};
use user_login_backend::config::{AppConfig, ServerConfig, ServiceKind};
use user_login_backend::errors::AppError;
use user_login_backend::repositories::{identity_store_from_config, profile_store_from_config};
use user_login_backend::routes::{
    configure_auth_private_routes, configure_auth_public_routes, configure_user_service_routes,
};
use user_login_backend::seed::{seed_identities, seed_profiles};
use user_login_backend::services::{AuthService, IdentityService, PasswordHasher, ProfileService, TokenService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let service = ServiceKind::resolve(std::env::args().nth(1), std::env::var("APP_NAME").ok())
        .map_err(into_io_error)?;
    let config = AppConfig::from_env().map_err(into_io_error)?;

    info!("🚀 {:?} 서비스 시작중... (환경: {:?})", service, config.environment);

    match service {
        ServiceKind::Auth => run_auth_service(config).await,
        ServiceKind::User => run_user_service(config).await,
    }
}

/// 인증 서비스: 공개/비공개 리스너를 함께 실행합니다.
///
/// 어느 한쪽이 실패하면 프로세스가 종료됩니다.
async fn run_auth_service(config: AppConfig) -> std::io::Result<()> {
    let identity_store = identity_store_from_config(&config.database)
        .await
        .map_err(into_io_error)?;
    let hasher = PasswordHasher::from_config(&config.password);
    let token_service = Arc::new(TokenService::new(&config.jwt));

    if let Err(e) = seed_identities(identity_store.as_ref(), &hasher).await {
        error!("기본 Identity 적재 실패: {}", e);
    }

    let tokens = web::Data::from(token_service.clone());
    let auth_service = web::Data::new(AuthService::new(identity_store.clone(), hasher, token_service));
    let identity_service = web::Data::new(IdentityService::new(identity_store, hasher));

    let server = config.server.clone();
    let workers = server.workers;
    let public_address = (server.host.clone(), server.auth_public_port);
    let private_address = (server.host.clone(), server.auth_private_port);

    warn_if_no_cors_origins(&server);
    info!("🌐 공개 리스너: http://{}:{}", public_address.0, public_address.1);
    info!("🔒 비공개 리스너: http://{}:{}", private_address.0, private_address.1);

    let public_server = {
        let tokens = tokens.clone();
        HttpServer::new(move || {
            App::new()
                .wrap(configure_cors(&server))
                .wrap(middleware::Logger::default())
                .wrap(middleware::NormalizePath::trim())
                .app_data(tokens.clone())
                .app_data(auth_service.clone())
                .configure(configure_auth_public_routes)
        })
        .bind(public_address)?
        .workers(workers)
        .run()
    };

    let private_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(tokens.clone())
            .app_data(identity_service.clone())
            .configure(configure_auth_private_routes)
    })
    .bind(private_address)?
    .workers(workers)
    .run();

    futures_util::future::try_join(public_server, private_server)
        .await
        .map(|_| ())
}

/// 프로필 서비스
async fn run_user_service(config: AppConfig) -> std::io::Result<()> {
    let profile_store = profile_store_from_config(&config.database)
        .await
        .map_err(into_io_error)?;
    let token_service = Arc::new(TokenService::new(&config.jwt));

    let identity_client: Arc<dyn IdentityClient> = Arc::new(
        HttpIdentityClient::new(&config.peer, token_service.clone()).map_err(into_io_error)?,
    );
    info!("🔗 인증 서비스 피어: {}", config.peer.auth_service_private_url);

    if let Err(e) = seed_profiles(profile_store.as_ref()).await {
        error!("기본 프로필 적재 실패: {}", e);
    }

    let tokens = web::Data::from(token_service);
    let profile_service = web::Data::new(ProfileService::new(
        profile_store,
        identity_client,
        config.peer.compensation_attempts,
    ));

    let server = config.server.clone();
    let address = (server.host.clone(), server.user_service_port);
    warn_if_no_cors_origins(&server);
    info!("🌐 프로필 서비스: http://{}:{}", address.0, address.1);

    let workers = server.workers;
    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&server))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(tokens.clone())
            .app_data(profile_service.clone())
            .configure(configure_user_service_routes)
    })
    .bind(address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    // 로거 초기화 전이라 결과는 stderr로 남김
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
fn configure_cors(server: &ServerConfig) -> Cors {
    let cors = server
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

fn warn_if_no_cors_origins(server: &ServerConfig) {
    if server.cors_allowed_origins.is_empty() {
        warn!("CORS 허용 Origin이 비어 있습니다. 브라우저 교차 출처 요청은 거부됩니다");
    }
}

fn into_io_error(e: AppError) -> std::io::Error {
    error!("❌ 시작 실패: {}", e);
    std::io::Error::other(e.to_string())
}

//! eStore 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 서비스를 초기화합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use estore_user_service::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend,
};
use estore_user_service::core::errors::AppResult;
use estore_user_service::core::registry::ServiceLocator;
use estore_user_service::db::Database;
use estore_user_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use estore_user_service::routes::configure_all_routes;
use estore_user_service::services::users::{UserService, UuidIdGenerator};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let environment = Environment::current();
    info!("🚀 eStore 사용자 서비스 시작중... ({:?})", environment);

    let user_repo = initialize_user_repository().await.map_err(|e| {
        error!("저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 사용자 저장소: {}", user_repo.name());

    ServiceLocator::set(Arc::new(UserService::new(user_repo, Arc::new(UuidIdGenerator))));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(&environment).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(environment: &Environment) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    let max_age = if environment.is_production() { 3600 } else { 60 };

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins, max_age);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 eprintln으로 남김
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=estore_user_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 사용자 저장소를 생성합니다
///
/// MongoDB를 선택한 경우 연결과 `ping`이 성공해야 합니다.
async fn initialize_user_repository() -> AppResult<Arc<dyn UserRepository>> {
    match StorageBackend::current() {
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);
            info!("데이터베이스: {}", database.database_name());
            Ok(Arc::new(MongoUserRepository::new(database)))
        }
        StorageBackend::InMemory => {
            info!("메모리 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(allowed_origins: &[String], max_age: usize) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age)
}

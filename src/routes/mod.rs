//! # Route Configuration
//!
//! 애플리케이션의 모든 HTTP 라우트와 JSON 추출기 설정을 등록합니다.
//!
//! ```text
//! GET  /health                   헬스체크
//! POST /api/v1/users             사용자 생성
//! GET  /api/v1/users/{user_id}   사용자 조회
//! ```

use crate::config::StorageBackend;
use crate::core::errors::AppError;
use crate::handlers;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 역직렬화 실패도 공통 에러 형식으로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users` - 사용자 생성 (회원가입)
/// - `GET /api/v1/users/{user_id}` - 사용자 조회
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"password1","first_name":"A","last_name":"B","birth_date":"2000-01-01"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
    );
}

/// 잘못된 JSON 본문을 `400 bad_request`로 변환합니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("요청 본문 해석 실패: {}", err);
    AppError::BadRequest(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "estore_user_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "storage": "mongo"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "estore_user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": StorageBackend::current().as_str()
    }))
}

//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 정의하고 `actix_web::ResponseError`를 구현하여,
//! 핸들러에서 `?`로 전파된 에러가 자동으로 일관된 JSON 응답이 됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 실패 (필드/메시지 목록 포함) |
//! | `BadRequest` | 400 Bad Request | 역직렬화 불가능한 요청 본문 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 이미 존재하는 사용자 ID |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "2 field(s) failed validation: ...",
//!   "details": [
//!     { "field": "email", "message": "Invalid email format" },
//!     { "field": "password", "message": "`password` must be at least 8 characters" }
//!   ]
//! }
//! ```
//!
//! `details`는 `ValidationError`에서만 포함됩니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use crate::domain::validation::FieldErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드 검증 실패 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(FieldErrors),

    /// 요청 본문 해석 실패 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::ConflictError(_) => "conflict",
            AppError::DatabaseError(_) => "database_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 계열은 내부 메시지를 노출하지 않고 서버 로그에만 남깁니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationError(errors) => json!({
                "error": self.code(),
                "message": self.to_string(),
                "details": errors,
            }),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                json!({
                    "error": self.code(),
                    "message": "서버 오류가 발생했습니다",
                })
            }
            _ => json!({
                "error": self.code(),
                "message": self.to_string(),
            }),
        };

        HttpResponse::build(status).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use crate::domain::validation::FieldError;

    fn field_errors() -> FieldErrors {
        FieldErrors::new(vec![
            FieldError::new("email", "required", "`email` is required"),
            FieldError::new("birth_date", "pattern", "`birth_date` must be YYYY-MM-DD"),
        ])
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(field_errors());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_response() {
        let error = AppError::BadRequest("expected a string".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("duplicate id".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_validation_error_body_carries_field_details() {
        let response = AppError::from(field_errors()).error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "validation_error");
        assert_eq!(
            body["details"],
            json!([
                { "field": "email", "message": "`email` is required" },
                { "field": "birth_date", "message": "`birth_date` must be YYYY-MM-DD" }
            ])
        );
    }

    #[actix_web::test]
    async fn test_internal_error_body_hides_cause() {
        let response = AppError::DatabaseError("secret connection string".to_string()).error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(!body.contains("secret connection string"));
    }
}

//! # User Management HTTP Handlers
//!
//! 사용자 등록과 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users/{user_id}` | 사용자 조회 | 200 OK |
//!
//! 핸들러는 요청을 서비스로 넘기고 결과를 HTTP 응답으로 바꾸는 일만 합니다.
//! 검증과 ID 부여는 [`UserService`]가 담당합니다.

use actix_web::{web, HttpResponse, get, post};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "ada@example.com",
///   "password": "password1",
///   "first_name": "Ada",
///   "middle_name": "",
///   "last_name": "Lovelace",
///   "birth_date": "1815-12-10"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "user": { "id": "3f1c2b9e-...", "email": "ada@example.com" },
///   "message": "사용자가 성공적으로 생성되었습니다"
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "validation_error",
///   "message": "1 field(s) failed validation: email: Invalid email format",
///   "details": [{ "field": "email", "message": "Invalid email format" }]
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ada@example.com","password":"password1","first_name":"Ada","last_name":"Lovelace","birth_date":"1815-12-10"}'
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance()?;
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 조회 핸들러
///
/// `GET /api/v1/users/{user_id}`
///
/// 비밀번호를 제외한 `{ "id", "email" }`을 반환하고,
/// 없는 ID면 404 `not_found`를 반환합니다.
#[get("/{user_id}")]
pub async fn get_user(
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let service = UserService::instance()?;
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

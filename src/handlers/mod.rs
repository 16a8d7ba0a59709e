//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, ID 부여                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 레코드 저장                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTO - 도메인 모델                     ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현으로
//! JSON 응답이 됩니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 등록 (`POST /api/v1/users`), 조회 (`GET /api/v1/users/{id}`)

pub mod users;

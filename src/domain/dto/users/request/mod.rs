//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//! 검증은 어노테이션 대신 명시적인 규칙 목록([`crate::domain::validation`])으로 검증을 수행합니다.
//!
//! ## 검증 흐름
//!
//! ```text
//! JSON body ──serde──▶ CreateUserRequest ──into_validated()──┬─▶ ValidatedUserRequest
//!                                                            └─▶ FieldErrors (400 Bad Request)
//! ```
//!
//! 검증 실패 시 `FieldErrors`가 반환되며,
//! 이는 `AppError::ValidationError`를 거쳐 HTTP 400 응답으로 변환됩니다.

pub mod create_user;

pub use create_user::{CreateUserRequest, ValidatedUserRequest};

//! 사용자 관리 서비스 모듈
//!
//! 회원가입 요청을 검증하고, ID를 부여해 사용자 레코드로 저장합니다.
//!
//! # Features
//!
//! - 경계 검증 ([`CreateUserRequest::into_validated`](crate::domain::dto::users::request::CreateUserRequest::into_validated))
//! - ID 생성 ([`IdGenerator`])
//! - 레코드 저장/조회 ([`UserRepository`](crate::repositories::users::UserRepository))

pub mod user_service;
pub mod id_generator;

pub use user_service::UserService;
pub use id_generator::{IdGenerator, UuidIdGenerator};

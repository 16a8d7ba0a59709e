//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 전달하는 응답 구조를 정의합니다.
//!
//! - **데이터 은닉**: 비밀번호는 어떤 응답에도 포함되지 않음
//! - **일관성**: 모든 응답이 snake_case 키를 사용

pub mod user_response;

pub use user_response::{UserResponse, CreateUserResponse};

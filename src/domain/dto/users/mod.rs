//! # 사용자 DTO 모듈
//!
//! 회원가입 요청과 사용자 응답 DTO를 제공합니다.
//!
//! ```text
//! dto::users
//! ├── request/   - CreateUserRequest, ValidatedUserRequest
//! └── response/  - UserResponse, CreateUserResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

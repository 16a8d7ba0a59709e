//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 데이터 구조를 정의합니다.
//! 엔티티([`crate::domain::entities`])와 분리되어 있어 저장 형태가 바뀌어도
//! API 계약은 유지됩니다.

pub mod users;

pub use users::*;

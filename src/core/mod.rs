//! # Core Framework Module
//!
//! 서비스 전반에서 사용하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 싱글톤 컨테이너
//! - **ServiceLocator**: 시작 시 등록한 서비스 인스턴스를 타입으로 조회
//! - **Thread-safe**: `RwLock` 기반 동시 접근
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult};
pub use registry::ServiceLocator;

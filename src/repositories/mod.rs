//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 사용자 레코드 저장은 [`users::UserRepository`] 트레이트 뒤에 숨겨져 있으며,
//! 실행 환경에 따라 MongoDB 또는 메모리 구현이 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo = InMemoryUserRepository::new();
//! let saved = repo.save(user).await?;
//! let found = repo.find_by_id(&saved.id).await?;
//! ```

pub mod users;

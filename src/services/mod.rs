//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
//! 등록되고, 핸들러는 `instance()`로 공유 인스턴스를 가져옵니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance()?;
//! let response = user_service.create_user(request).await?;
//! ```

pub mod users;

//! Users Entity Module
//!
//! 사용자 레코드(`User`)를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::from_registration(id, &accepted_request);
//! ```

pub mod user;

pub use user::User;

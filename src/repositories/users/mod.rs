//! 사용자 데이터 액세스 계층
//!
//! 영속성 협력자의 계약([`UserRepository`])과 두 가지 구현을 제공합니다.
//!
//! | 구현 | 저장 위치 | 용도 |
//! |------|-----------|------|
//! | [`MongoUserRepository`] | MongoDB `users` 컬렉션 | 운영 |
//! | [`InMemoryUserRepository`] | 프로세스 메모리 | 개발, 테스트 |

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

pub mod user_repo;
pub mod in_memory;

pub use user_repo::MongoUserRepository;
pub use in_memory::InMemoryUserRepository;

/// 사용자 레코드 저장소 계약
///
/// 구현체는 `id`의 유일성을 보장해야 합니다. 이미 존재하는 `id`로 저장을 시도하면
/// `AppError::ConflictError`를 반환합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장소 이름 (로그용)
    fn name(&self) -> &str;

    /// 새 레코드를 저장하고 저장된 레코드를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// ID로 레코드를 조회합니다. 없으면 `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
}

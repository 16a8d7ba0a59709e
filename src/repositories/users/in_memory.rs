//! # 메모리 사용자 리포지토리
//!
//! 외부 저장소 없이 프로세스 메모리에 사용자 레코드를 보관합니다.
//! `USER_STORE=memory`로 실행하거나 테스트에서 사용합니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use super::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 레코드 수
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read_lock()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read_lock()?.is_empty())
    }

    fn read_lock(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<String, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    fn name(&self) -> &str {
        "in-memory"
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))?;

        if users.contains_key(&user.id) {
            return Err(AppError::ConflictError(format!(
                "이미 존재하는 사용자 ID입니다: {}",
                user.id
            )));
        }

        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.read_lock()?.get(id).cloned())
    }
}

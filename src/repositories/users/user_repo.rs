//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 사용자 레코드를 저장합니다.
//! 레코드 ID는 문서의 `_id`로 저장되므로 MongoDB의 기본 `_id` 유니크 인덱스가
//! 동시 요청 상황에서도 ID 유일성을 보장합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::User;
use super::UserRepository;

const USERS_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn name(&self) -> &str {
        "mongo"
    }

    async fn save(&self, user: User) -> AppResult<User> {
        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError(format!("이미 존재하는 사용자 ID입니다: {}", user.id))
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        log::debug!("사용자 문서 저장: {}", user.id);

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

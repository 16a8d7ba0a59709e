//! User Entity Implementation
//!
//! 사용자 레코드의 구현체입니다. 검증을 통과한 회원가입 요청 하나로부터 만들어지며,
//! 저장소에는 `{ _id, email, password }` 형태로 기록됩니다.

use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::ValidatedUserRequest;

/// 사용자 엔티티
///
/// `id`는 저장 전에 외부 협력자(`IdGenerator`)가 부여하며 전체 레코드에서 유일합니다.
/// 이름과 생년월일은 요청 단계에서 검증되지만 레코드에는 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이메일
    pub email: String,
    /// 요청에서 그대로 복사된 비밀번호 (저장 표현은 저장소 협력자의 책임)
    pub password: String,
}

impl User {
    pub fn new(id: String, email: String, password: String) -> Self {
        Self { id, email, password }
    }

    /// 검증된 회원가입 요청으로부터 새 레코드를 만듭니다.
    pub fn from_registration(id: String, request: &ValidatedUserRequest) -> Self {
        Self::new(id, request.email().to_string(), request.password().to_string())
    }
}

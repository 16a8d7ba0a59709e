use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, email, .. } = user;

        Self { id, email }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password() {
        let user = User::new("id-1".to_string(), "a@b.com".to_string(), "password1".to_string());
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json, serde_json::json!({ "id": "id-1", "email": "a@b.com" }));
    }
}

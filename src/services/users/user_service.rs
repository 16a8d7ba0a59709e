//! # 사용자 관리 서비스 구현
//!
//! 회원가입 요청을 받아 사용자 레코드를 만드는 흐름을 구현합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! CreateUserRequest
//!   │ 1. into_validated()        ── 실패 ─▶ AppError::ValidationError(FieldErrors)
//!   ▼
//! ValidatedUserRequest
//!   │ 2. IdGenerator::next_id()  ── 빈 ID ─▶ AppError::InternalError
//!   │ 3. User::from_registration()
//!   │ 4. UserRepository::save()  ── 중복 ID ─▶ AppError::ConflictError
//!   ▼
//! CreateUserResponse { user: { id, email }, message }
//! ```
//!
//! 비밀번호는 요청 그대로 레코드에 복사됩니다. 해싱 등 저장 표현은
//! 저장소 협력자의 책임이며, 응답과 로그에는 절대 포함되지 않습니다.

use std::sync::Arc;
use std::time::Instant;
use crate::{
    core::{
        errors::{AppError, AppResult},
        registry::ServiceLocator,
    },
    domain::{
        dto::users::{
            request::CreateUserRequest,
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::User,
    },
    repositories::users::UserRepository,
};
use super::id_generator::IdGenerator;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 ID 생성기는 생성 시점에 주입됩니다.
/// 애플리케이션에서는 `main`이 한 번 생성해 [`ServiceLocator`]에 등록하고,
/// 핸들러는 [`UserService::instance`]로 꺼내 씁니다.
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(InMemoryUserRepository::new()),
///     Arc::new(UuidIdGenerator),
/// );
/// ServiceLocator::set(Arc::new(service));
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            user_repo,
            id_generator,
        }
    }

    /// 등록된 공유 인스턴스를 반환합니다.
    pub fn instance() -> AppResult<Arc<UserService>> {
        ServiceLocator::get::<UserService>()
    }

    /// 새 사용자 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 생성된 사용자 정보 (비밀번호 제외)
    /// * `Err(AppError::ValidationError)` - 하나 이상의 필드 규칙 위반
    /// * `Err(AppError::ConflictError)` - 생성된 ID가 이미 존재
    /// * `Err(AppError::InternalError)` - ID 생성기가 빈 ID를 반환
    /// * `Err(AppError::DatabaseError)` - 저장소 오류
    ///
    /// # 로깅
    ///
    /// ```text
    /// [WARN] 사용자 생성 요청 거부: 2건 위반 (email, password)
    /// [INFO] 사용자 생성 완료: 3f1c...; 저장소 in-memory
    /// [DEBUG] Total user creation took: 1.2ms
    /// ```
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let start_time = Instant::now();

        let accepted = request.into_validated().map_err(|errors| {
            log::warn!(
                "사용자 생성 요청 거부: {}건 위반 ({})",
                errors.len(),
                errors.fields().join(", ")
            );
            AppError::ValidationError(errors)
        })?;

        let id = self.id_generator.next_id();
        if id.trim().is_empty() {
            return Err(AppError::InternalError("ID 생성기가 빈 ID를 반환했습니다".to_string()));
        }

        let user = User::from_registration(id, &accepted);
        let created_user = self.user_repo.save(user).await?;

        log::info!(
            "사용자 생성 완료: {}; 저장소 {}",
            created_user.id,
            self.user_repo.name()
        );
        log::debug!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }
}

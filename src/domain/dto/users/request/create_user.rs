//! # 사용자 생성 요청 DTO
//!
//! 회원가입 요청(Registration Request)을 표현하는 경계 값 객체입니다.
//! 클라이언트가 보낸 JSON을 그대로 받아들인 뒤, [`CreateUserRequest::into_validated`]를
//! 통해 한 번 검증하고 [`ValidatedUserRequest`]로 변환합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `email` | 필수 | ``email` is required` |
//! | `email` | 이메일 형식 | `Invalid email format` |
//! | `password` | 필수 | ``password` is required` |
//! | `password` | 8자 이상 | ``password` must be at least 8 characters` |
//! | `first_name` | 필수 | ``first_name` is required` |
//! | `middle_name` | 없음 | - |
//! | `last_name` | 필수 | ``last_name` is required` |
//! | `birth_date` | 필수 | ``birth_date` is required` |
//! | `birth_date` | `YYYY-MM-DD` 모양 | ``birth_date` must be YYYY-MM-DD` |
//!
//! 메시지는 외부 클라이언트와의 호환을 위해 영문 원문을 그대로 유지합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let request: CreateUserRequest = serde_json::from_str(body)?;
//! match request.into_validated() {
//!     Ok(accepted) => user_service.register(accepted).await?,
//!     Err(errors) => return Err(AppError::ValidationError(errors)),
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
use crate::domain::validation::{evaluate, predicates, FieldError, FieldErrors, FieldRules, Rule};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// 모든 필드를 `Option<String>`으로 받습니다. 키가 빠진 요청도 역직렬화 단계에서
/// 거부되지 않고, 검증 단계에서 필드별 필수 메시지로 보고됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "a@b.com",
///   "password": "password1",
///   "first_name": "Ada",
///   "middle_name": "",
///   "last_name": "Lovelace",
///   "birth_date": "1815-12-10"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
}

/// 필드 선언 순서가 곧 에러 보고 순서입니다.
static CREATE_USER_RULES: &[FieldRules<CreateUserRequest>] = &[
    FieldRules {
        field: "email",
        read: |r| r.email.as_deref(),
        required: Some("`email` is required"),
        checks: &[Rule::new("email", "Invalid email format", predicates::is_email)],
    },
    FieldRules {
        field: "password",
        read: |r| r.password.as_deref(),
        required: Some("`password` is required"),
        checks: &[Rule::new(
            "length",
            "`password` must be at least 8 characters",
            predicates::has_password_length,
        )],
    },
    FieldRules {
        field: "first_name",
        read: |r| r.first_name.as_deref(),
        required: Some("`first_name` is required"),
        checks: &[],
    },
    FieldRules {
        field: "middle_name",
        read: |r| r.middle_name.as_deref(),
        required: None,
        checks: &[],
    },
    FieldRules {
        field: "last_name",
        read: |r| r.last_name.as_deref(),
        required: Some("`last_name` is required"),
        checks: &[],
    },
    FieldRules {
        field: "birth_date",
        read: |r| r.birth_date.as_deref(),
        required: Some("`birth_date` is required"),
        checks: &[Rule::new(
            "pattern",
            "`birth_date` must be YYYY-MM-DD",
            predicates::is_date_shaped,
        )],
    },
];

impl CreateUserRequest {
    /// 모든 규칙을 평가하여 위반 사항을 순서대로 반환합니다.
    ///
    /// 위반이 없으면 빈 벡터를 반환합니다.
    pub fn violations(&self) -> Vec<FieldError> {
        evaluate(CREATE_USER_RULES, self)
    }

    /// 요청을 검증하고, 통과하면 불변 값 객체로 변환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ValidatedUserRequest)` - 모든 규칙 통과
    /// * `Err(FieldErrors)` - 실패한 모든 필드의 위반 목록 (최소 1건)
    pub fn into_validated(self) -> Result<ValidatedUserRequest, FieldErrors> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(FieldErrors::new(violations));
        }

        // 위의 검증으로 필수 필드는 모두 Some 이 보장됨
        Ok(ValidatedUserRequest {
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            middle_name: self.middle_name,
            last_name: self.last_name.unwrap_or_default(),
            birth_date: self.birth_date.unwrap_or_default(),
        })
    }
}

impl Validate for CreateUserRequest {
    /// `validator` 생태계와의 호환을 위한 구현
    ///
    /// 동일한 규칙 목록을 사용하며, 결과를 `ValidationErrors`로 변환합니다.
    /// `ValidationErrors`는 필드 순서를 보존하지 않으므로 순서가 필요하면
    /// [`CreateUserRequest::violations`]를 사용합니다.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let violations = self.violations();
        if violations.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for violation in violations {
            errors.add(
                violation.field,
                ValidationError::new(violation.code).with_message(violation.message.into()),
            );
        }
        Err(errors)
    }
}

/// 검증을 통과한 회원가입 요청
///
/// 생성 이후 변경할 수 없으며, 값은 클라이언트가 보낸 그대로 보존됩니다
/// (공백 제거 등 정규화 없음).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUserRequest {
    email: String,
    password: String,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    birth_date: String,
}

impl ValidatedUserRequest {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }
}

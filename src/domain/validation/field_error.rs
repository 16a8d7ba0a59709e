//! 필드 검증 에러 타입
//!
//! 검증 실패는 예외 상황이 아니라 정상적인 결과이므로, 첫 번째 실패에서 멈추지 않고
//! [`FieldErrors`]에 모든 위반 사항을 모아 상위 계층으로 전달합니다.

use std::fmt;
use serde::Serialize;
use thiserror::Error;

/// 단일 필드 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 위반이 발생한 필드명 (JSON 키와 동일)
    pub field: &'static str,
    /// 위반된 규칙 코드
    #[serde(skip)]
    pub code: &'static str,
    /// 사람이 읽을 수 있는 메시지
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, code: &'static str, message: &'static str) -> Self {
        Self { field, code, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 규칙 선언 순서대로 정렬된 필드 검증 실패 목록
///
/// 비어 있는 목록은 만들지 않는 것을 원칙으로 합니다.
/// 검증 통과 여부는 `Result`로 표현됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation: {}", .0.len(), summary(.0))]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// 위반이 발생한 필드명 목록 (중복 없이 순서 유지)
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::with_capacity(self.0.len());
        for error in &self.0 {
            if !fields.contains(&error.field) {
                fields.push(error.field);
            }
        }
        fields
    }

    /// 특정 필드의 메시지 목록
    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message)
            .collect()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

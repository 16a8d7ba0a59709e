//! # 필드 단위 검증 엔진
//!
//! 요청 DTO의 각 필드에 적용되는 검증 규칙을 어노테이션이 아닌 **데이터**로 표현합니다.
//! 규칙은 `(필드명, 필수 메시지, [형식 규칙...])` 형태의 정렬된 목록이며,
//! [`evaluate`]가 이를 순서대로 모두 평가하여 위반 사항을 빠짐없이 수집합니다.
//!
//! ## 평가 순서
//!
//! ```text
//! for field in rules (선언 순서)
//!   ├─ 값이 비어 있음(None / "" / 공백만) ─▶ required 메시지 1건 (해당 필드 평가 종료)
//!   └─ 값이 있음 ─▶ 형식 규칙을 순서대로 확인, 첫 번째 실패만 보고
//! ```
//!
//! 필드 간에는 단락 평가를 하지 않습니다. 실패한 필드는 모두 보고됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::validation::{evaluate, FieldRules, Rule};
//!
//! static RULES: &[FieldRules<MyRequest>] = &[FieldRules {
//!     field: "email",
//!     read: |r| r.email.as_deref(),
//!     required: Some("`email` is required"),
//!     checks: &[Rule::new("email", "Invalid email format", predicates::is_email)],
//! }];
//!
//! let violations = evaluate(RULES, &request);
//! ```

pub mod field_error;
pub mod predicates;

pub use field_error::{FieldError, FieldErrors};

/// 하나의 형식 규칙 (코드, 메시지, 판정 함수)
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// 기계 판독용 규칙 코드 (`email`, `length`, `pattern` 등)
    pub code: &'static str,
    /// 클라이언트에 그대로 노출되는 메시지
    pub message: &'static str,
    /// 비어 있지 않은 값에 대해 호출되며, 통과 시 `true`
    pub check: fn(&str) -> bool,
}

impl Rule {
    pub const fn new(code: &'static str, message: &'static str, check: fn(&str) -> bool) -> Self {
        Self { code, message, check }
    }
}

/// 한 필드에 대한 규칙 묶음
///
/// `T`는 검증 대상 구조체 타입이며, `read`로 필드의 원시 값을 꺼냅니다.
pub struct FieldRules<T> {
    /// 외부 계약(JSON 키)과 동일한 필드명
    pub field: &'static str,
    /// 대상 구조체에서 필드 값을 읽는 함수
    pub read: fn(&T) -> Option<&str>,
    /// `Some(message)`이면 필수 필드 (non-blank)
    pub required: Option<&'static str>,
    /// 값이 비어 있지 않을 때 순서대로 적용할 형식 규칙
    pub checks: &'static [Rule],
}

/// 규칙 목록 전체를 평가하여 위반 사항을 규칙 선언 순서대로 반환합니다.
///
/// 순수 함수입니다. I/O나 공유 상태에 접근하지 않습니다.
pub fn evaluate<T>(rules: &[FieldRules<T>], target: &T) -> Vec<FieldError> {
    let mut violations = Vec::new();

    for field_rules in rules {
        let value = (field_rules.read)(target);

        if predicates::is_blank(value) {
            if let Some(message) = field_rules.required {
                violations.push(FieldError::new(field_rules.field, "required", message));
            }
            // 비어 있는 선택 필드는 형식 규칙 대상이 아님
            continue;
        }

        let value = value.unwrap_or_default();
        if let Some(rule) = field_rules.checks.iter().find(|rule| !(rule.check)(value)) {
            violations.push(FieldError::new(field_rules.field, rule.code, rule.message));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        nickname: Option<String>,
        code: Option<String>,
    }

    fn starts_with_a(value: &str) -> bool {
        value.starts_with('a')
    }

    fn ends_with_z(value: &str) -> bool {
        value.ends_with('z')
    }

    static SAMPLE_RULES: &[FieldRules<Sample>] = &[
        FieldRules {
            field: "name",
            read: |s| s.name.as_deref(),
            required: Some("name required"),
            checks: &[],
        },
        FieldRules {
            field: "nickname",
            read: |s| s.nickname.as_deref(),
            required: None,
            checks: &[Rule::new("prefix", "nickname must start with a", starts_with_a)],
        },
        FieldRules {
            field: "code",
            read: |s| s.code.as_deref(),
            required: Some("code required"),
            checks: &[
                Rule::new("prefix", "code must start with a", starts_with_a),
                Rule::new("suffix", "code must end with z", ends_with_z),
            ],
        },
    ];

    fn sample(name: Option<&str>, nickname: Option<&str>, code: Option<&str>) -> Sample {
        Sample {
            name: name.map(str::to_string),
            nickname: nickname.map(str::to_string),
            code: code.map(str::to_string),
        }
    }

    #[test]
    fn test_all_rules_pass() {
        let target = sample(Some("n"), Some("abc"), Some("abz"));
        assert!(evaluate(SAMPLE_RULES, &target).is_empty());
    }

    #[test]
    fn test_every_failing_field_is_reported_in_order() {
        let target = sample(None, Some("bad"), Some("bbb"));
        let violations = evaluate(SAMPLE_RULES, &target);

        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "nickname", "code"]);
    }

    #[test]
    fn test_blank_required_field_reports_only_required_message() {
        let target = sample(Some("n"), None, Some("   "));
        let violations = evaluate(SAMPLE_RULES, &target);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "required");
        assert_eq!(violations[0].message, "code required");
    }

    #[test]
    fn test_only_first_failing_format_rule_is_reported() {
        let target = sample(Some("n"), None, Some("bbb"));
        let violations = evaluate(SAMPLE_RULES, &target);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "prefix");
    }

    #[test]
    fn test_blank_optional_field_skips_format_rules() {
        let target = sample(Some("n"), Some(""), Some("az"));
        assert!(evaluate(SAMPLE_RULES, &target).is_empty());
    }
}

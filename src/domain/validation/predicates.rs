//! 검증 규칙에서 사용하는 판정 함수 모음
//!
//! 모든 함수는 부수 효과가 없는 순수 함수입니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

/// 비밀번호 최소 길이 (유니코드 스칼라 값 기준)
pub const PASSWORD_MIN_LENGTH: usize = 8;

// `\d`는 유니코드 숫자까지 허용하므로 ASCII 범위를 명시
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape regex must compile")
});

/// 값이 없거나, 빈 문자열이거나, 공백 문자로만 이루어져 있으면 `true`
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// 이메일 구문 검증 (HTML5 / RFC 5322 기반 `validator` 구현)
pub fn is_email(value: &str) -> bool {
    value.to_owned().validate_email()
}

/// 비밀번호 길이가 [`PASSWORD_MIN_LENGTH`] 이상이면 `true`
///
/// 내용(대소문자, 숫자 포함 여부)은 보지 않습니다.
pub fn has_password_length(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LENGTH
}

/// `YYYY-MM-DD` 형태인지 확인합니다.
///
/// 모양만 검사하며 달력상 유효성(월 01-12, 일 범위)은 확인하지 않습니다.
/// `2024-13-40`도 통과합니다.
pub fn is_date_shaped(value: &str) -> bool {
    DATE_SHAPE_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t\n")));
        assert!(!is_blank(Some(" a ")));
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("ada.lovelace+estore@example.co.uk"));

        assert!(!is_email("not-an-email"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user name@example.com"));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(!has_password_length("1234567"));
        assert!(has_password_length("12345678"));
        assert!(has_password_length("        "));
        // 멀티바이트 문자도 한 글자로 계산
        assert!(has_password_length("비밀번호비밀번호"));
        assert!(!has_password_length("비밀번호"));
    }

    #[test]
    fn test_date_shape_is_pattern_only() {
        assert!(is_date_shaped("1815-12-10"));
        assert!(is_date_shaped("2024-13-40"));
        assert!(is_date_shaped("0000-00-00"));

        assert!(!is_date_shaped("1815/12/10"));
        assert!(!is_date_shaped("15-12-10"));
        assert!(!is_date_shaped("1815-12-10 "));
        assert!(!is_date_shaped("1815-12-100"));
        assert!(!is_date_shaped("abcd-ef-gh"));
        // 전각 숫자는 허용하지 않음
        assert!(!is_date_shaped("１８１５-12-10"));
    }
}

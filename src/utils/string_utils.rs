//! # 문자열 유틸리티
//!
//! 조회 키(사용자 이름) 비교와 관련된 공통 유틸리티 함수들입니다.

/// 두 이름이 조회 키로서 같은지 비교 (대소문자 무시, 완전 일치)
///
/// 유니코드 소문자 변환 후 비교하므로 부분 문자열은 일치하지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::names_match;
///
/// assert!(names_match("Anshul", "anshul"));
/// assert!(!names_match("Anshul", "Ansh"));
/// ```
pub fn names_match(left: &str, right: &str) -> bool {
    lookup_key(left) == lookup_key(right)
}

/// 이름을 조회 키 형태(소문자)로 변환
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::lookup_key;
///
/// assert_eq!(lookup_key("ÄNSHUL"), "änshul");
/// ```
pub fn lookup_key(name: &str) -> String {
    name.to_lowercase()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

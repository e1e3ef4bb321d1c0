//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 이름 조회 키 비교, 문자열 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::names_match;
//!
//! assert!(names_match("Anshul", "ANSHUL"));
//! ```

pub mod string_utils;

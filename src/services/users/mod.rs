//! 사용자 관리 서비스 모듈
//!
//! 사용자 레코드와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 이름 필터 목록 조회 (대소문자 무시 완전 일치)
//! - 생성 시 이름 중복 방지
//! - 얕은 병합 기반 부분 수정 및 이름 변경
//! - 이름 기반 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//!
//! let users = user_service.list_users(Some("anshul"))?;
//! ```

pub mod user_service;

//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 인터페이스(trait)와 구현체를 분리하여, 서비스 계층이
//! `Arc<dyn UserRepository>`로 저장소를 주입받도록 합니다.
//!
//! # Features
//!
//! - 삽입 순서를 유지하는 메모리 저장소
//! - 대소문자를 무시한 이름 기반 선형 탐색
//! - 이름 유일성 제약 (중복 시 `ConflictError`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! ```

pub mod users;

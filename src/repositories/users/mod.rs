//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) trait과 메모리 기반 구현체
//! [`InMemoryUserRepository`](user_repo::InMemoryUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::{InMemoryUserRepository, UserRepository};
//!
//! let repo = InMemoryUserRepository::new();
//! let users = repo.find_by_name("anshul")?;
//! ```

pub mod user_repo;

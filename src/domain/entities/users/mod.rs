//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{User, UserChanges};
//!
//! let mut user = User::new("Anshul".to_string(), 21, None, false);
//! user.apply(UserChanges { age: Some(22), ..Default::default() });
//! assert!(user.has_name("anshul"));
//! ```

pub mod user;

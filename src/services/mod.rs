//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 명시적으로 생성되어 `web::Data`로 핸들러에 전달됩니다.
//! 전역 싱글톤 상태는 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::web;
//! use crate::services::users::user_service::UserService;
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//! App::new().app_data(service.clone());
//! ```

pub mod users;

//! # Core Module
//!
//! 서비스 전 계층이 공유하는 핵심 타입을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `validator::ValidationErrors` → `AppError::ValidationError`
//!
//! ## 에러 처리
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! #[post("")]
//! async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let user = service.create_user(payload.into_inner())?;
//!     Ok(HttpResponse::Created().json(user))
//! }
//! ```

pub mod errors;

pub use errors::*;

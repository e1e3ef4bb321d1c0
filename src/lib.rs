//! 사용자 레코드 관리 서비스
//!
//! 이름(대소문자 무시)을 키로 사용자 레코드를 생성, 조회, 수정, 삭제하는
//! 작은 REST 서비스입니다. 레코드는 프로세스 메모리에만 보관되며
//! 재시작하면 사라집니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 목록/필터 조회, 부분 수정(이름 변경 포함), 삭제
//! - **이름 유일성**: 대소문자 무시 기준 중복 이름은 409 Conflict
//! - **입력 검증**: validator 기반 필드 검증, 모든 4xx는 `{"error": ...}` 형식
//! - **명시적 소유**: 저장소는 `UserService`가 소유하고 `web::Data`로 공유
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RwLock<Vec<..>> │ ← 메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_registry_service::repositories::users::user_repo::InMemoryUserRepository;
//! use user_registry_service::services::users::user_service::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let user = service.create_user(request)?;
//! let matches = service.list_users(Some("anshul"))?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

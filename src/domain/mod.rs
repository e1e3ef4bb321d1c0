//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 레코드와 API 데이터 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 보관되는 사용자 레코드
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (In-memory Repository)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//! - `User`: 이름, 나이, 성별(선택), 결혼 여부
//! - `UserChanges`: 얕은 병합용 부분 수정 내용
//!
//! ### [`dto`] - 데이터 전송 객체
//! - `CreateUserRequest`, `UpdateUserRequest`, `ListUsersQuery`
//! - `UserResponse`
//!
//! ## 데이터 흐름
//!
//! ```text
//! JSON ──serde──▶ CreateUserRequest ──validate──▶ User ──▶ Repository
//!                                                   │
//! JSON ◀──serde── UserResponse ◀──From<User>────────┘
//! ```

pub mod entities;
pub mod dto;

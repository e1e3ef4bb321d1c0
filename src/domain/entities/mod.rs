//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 직렬화 형식과 분리되어 있으며, HTTP 계약은 [`crate::domain::dto`]가 담당합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소에 보관되는 레코드)
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod users;

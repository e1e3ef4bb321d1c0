//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 문자열을 구조화된 Rust 타입으로
//! 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400)
//! 2. **형식 검증**: 이름 길이 등 필드 규칙 (`validator`, 실패 시 400)
//! 3. **비즈니스 검증**: 이름 중복 (서비스/저장소 계층, 실패 시 409)

pub mod create_user;
pub mod update_user;
pub mod list_users;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
pub use list_users::ListUsersQuery;

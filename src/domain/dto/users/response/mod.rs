//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장소의 [`User`](crate::domain::entities::users::user::User) 엔티티를
//! HTTP 응답용 JSON 형태로 변환합니다.

pub mod user_response;

pub use user_response::UserResponse;

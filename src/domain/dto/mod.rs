//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약을 명확히 하고,
//! 내부 엔티티 표현과 외부 JSON 표현을 분리합니다.
//!
//! | 역할 | 구현 |
//! |------|------|
//! | 요청 본문 매핑 | `serde::Deserialize` |
//! | 입력값 검증 | `validator::Validate` |
//! | 응답 본문 매핑 | `serde::Serialize` |
//! | 상태 코드와 함께 응답 | `Result<HttpResponse, AppError>` |

pub mod users;

//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs   # POST /user 본문
//! │   ├── update_user.rs   # PATCH|PUT /user/{name} 본문
//! │   └── list_users.rs    # GET /user?name= 쿼리
//! └── response/
//!     └── user_response.rs # 사용자 레코드 응답
//! ```
//!
//! 모든 필드는 JSON에서 camelCase(`isMarried`)로 표현됩니다.

pub mod request;
pub mod response;

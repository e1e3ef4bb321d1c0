//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 레코드 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 필수, 공백만으로 구성될 수 없음
//! - 최소 길이: 3자
//! - 대소문자 무시 유일성은 서비스 계층에서 검증
//!
//! ### 나이 (`age`)
//! - 필수, 0 이상의 정수 (타입 검증은 역직렬화 단계에서 수행)
//!
//! ### 성별 (`gender`)
//! - 선택, 문자열
//!
//! ### 결혼 여부 (`isMarried`)
//! - 필수, 불리언
//!
//! 정의되지 않은 필드는 역직렬화 시 무시됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::user::User;
use crate::utils::string_utils::is_valid_string;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Anshul",
///   "age": 21,
///   "gender": "male",
///   "isMarried": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// 사용자 이름 (조회 키)
    #[validate(length(min = 3, message = "이름은 최소 3자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 나이
    pub age: u32,

    /// 성별
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// 결혼 여부
    pub is_married: bool,
}

/// 이름이 공백만으로 구성되지 않았는지 검증
pub(crate) fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if !is_valid_string(name) {
        return Err(ValidationError::new("blank_name")
            .with_message("이름은 비어 있을 수 없습니다".into()));
    }
    Ok(())
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request.name, request.age, request.gender, request.is_married)
    }
}

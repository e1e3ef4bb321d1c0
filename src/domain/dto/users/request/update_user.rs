//! 사용자 부분 수정 요청 DTO
//!
//! `PATCH`/`PUT /user/{name}` 본문입니다. 제공된 필드만 기존 레코드에 병합되며,
//! 제공된 필드는 생성 요청과 동일한 규칙으로 검증됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::users::request::create_user::validate_not_blank;
use crate::domain::entities::users::user::UserChanges;

/// 사용자 부분 수정 요청 DTO
///
/// ```json
/// { "age": 22 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// 새 이름 (이름 변경 시 이후 조회 키도 바뀜)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, message = "이름은 최소 3자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_married: Option<bool>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        UserChanges {
            name: request.name,
            age: request.age,
            gender: request.gender,
            is_married: request.is_married,
        }
    }
}

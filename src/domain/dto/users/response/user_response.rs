use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 생성 요청과 동일한 필드 구성을 가지므로, 생성 직후의 응답은 입력과 같습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub name: String,
    pub age: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    pub is_married: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            name,
            age,
            gender,
            is_married,
        } = user;

        Self {
            name,
            age,
            gender,
            is_married,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let response = UserResponse::from(User::new("Anshul".to_string(), 21, None, false));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "name": "Anshul", "age": 21, "isMarried": false })
        );
    }

    #[test]
    fn test_gender_serialized_when_present() {
        let response = UserResponse::from(User::new(
            "Aniket".to_string(),
            22,
            Some("male".to_string()),
            true,
        ));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["gender"], "male");
        assert_eq!(value["isMarried"], true);
    }
}

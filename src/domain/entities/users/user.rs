//! User Entity Implementation
//!
//! 사용자 레코드의 핵심 구현체입니다.
//! 이름(대소문자 무시)이 조회 키 역할을 하며, 부분 수정은 얕은 병합으로 처리됩니다.

use crate::utils::string_utils::names_match;

/// 사용자 엔티티
///
/// 저장소에 보관되는 사용자 레코드입니다. 별도의 식별자 없이
/// `name`이 대소문자를 무시한 조회 키로 사용됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// 사용자 이름 (대소문자 무시 유일)
    pub name: String,
    /// 나이
    pub age: u32,
    /// 성별 (선택)
    pub gender: Option<String>,
    /// 결혼 여부
    pub is_married: bool,
}

/// 사용자 부분 수정 내용
///
/// `Some`인 필드만 기존 레코드에 덮어씁니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub is_married: Option<bool>,
}

impl User {
    /// 새 사용자 생성
    pub fn new(name: String, age: u32, gender: Option<String>, is_married: bool) -> Self {
        Self {
            name,
            age,
            gender,
            is_married,
        }
    }

    /// 조회 키와 일치하는지 확인 (대소문자 무시, 완전 일치)
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// 변경 내용을 얕은 병합으로 적용합니다.
    ///
    /// 제공되지 않은 필드는 그대로 유지됩니다.
    pub fn apply(&mut self, changes: UserChanges) {
        let UserChanges {
            name,
            age,
            gender,
            is_married,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if gender.is_some() {
            self.gender = gender;
        }
        if let Some(is_married) = is_married {
            self.is_married = is_married;
        }
    }
}

impl UserChanges {
    /// 적용할 변경 사항이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.is_married.is_none()
    }
}

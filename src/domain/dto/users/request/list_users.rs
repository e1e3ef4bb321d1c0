//! 사용자 목록 조회 쿼리 DTO

use serde::Deserialize;

/// `GET /user?name=` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    /// 이름 필터 (대소문자 무시 완전 일치)
    pub name: Option<String>,
}

impl ListUsersQuery {
    /// 실제로 적용할 이름 필터
    ///
    /// 빈 문자열은 필터 없음으로 취급합니다.
    pub fn name_filter(&self) -> Option<String> {
        self.name.clone().filter(|name| !name.is_empty())
    }
}

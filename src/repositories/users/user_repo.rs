//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 프로세스 메모리의 순서 있는 목록에 레코드를 보관하며,
//! 모든 조회는 대소문자를 무시한 이름 비교로 선형 탐색합니다.
//!
//! ## 특징
//!
//! - **삽입 순서 유지**: 목록 조회는 항상 생성 순서대로 반환
//! - **이름 유일성**: 대소문자 무시 기준으로 중복 이름 거부 (409 Conflict)
//! - **원자적 갱신**: 중복 검사와 변경은 하나의 쓰기 잠금 안에서 수행
//! - **명시적 소유**: 전역 상태 없이 `UserService`가 소유하고 `web::Data`로 공유

use std::sync::RwLock;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::{User, UserChanges};

/// 사용자 저장소 인터페이스
///
/// 서비스 계층은 이 trait에만 의존하므로 저장 방식을 교체할 수 있습니다.
/// 모든 이름 인자는 대소문자를 무시한 완전 일치로 비교됩니다.
pub trait UserRepository: Send + Sync {
    /// 모든 사용자를 삽입 순서대로 반환
    fn find_all(&self) -> AppResult<Vec<User>>;

    /// 이름이 일치하는 모든 사용자를 삽입 순서대로 반환
    fn find_by_name(&self, name: &str) -> AppResult<Vec<User>>;

    /// 이름이 일치하는 첫 번째 사용자를 반환
    fn find_one_by_name(&self, name: &str) -> AppResult<Option<User>>;

    /// 사용자를 목록 끝에 추가
    ///
    /// * `Err(AppError::ConflictError)` - 같은 이름의 사용자가 이미 존재
    fn insert(&self, user: User) -> AppResult<User>;

    /// 이름이 일치하는 사용자에 변경 내용을 병합
    ///
    /// * `Ok(None)` - 해당 이름의 사용자가 없음
    /// * `Err(AppError::ConflictError)` - 다른 사용자의 이름으로 변경 시도
    fn update(&self, name: &str, changes: UserChanges) -> AppResult<Option<User>>;

    /// 이름이 일치하는 사용자를 삭제
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 이름의 사용자가 없음
    fn delete(&self, name: &str) -> AppResult<bool>;

    /// 저장된 사용자 수
    fn count(&self) -> AppResult<usize>;
}

/// 메모리 기반 사용자 리포지토리
///
/// actix-web 워커 스레드들이 같은 인스턴스를 공유하므로 `RwLock`으로 보호합니다.
///
/// ```rust,ignore
/// let repo = InMemoryUserRepository::new();
/// repo.insert(User::new("Anshul".to_string(), 21, None, false))?;
///
/// let found = repo.find_by_name("anshul")?;
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 레코드로 채운 저장소 생성
    ///
    /// 초기 목록에서도 이름 유일성을 검사합니다.
    pub fn with_users(users: Vec<User>) -> AppResult<Self> {
        let repo = Self::new();
        for user in users {
            repo.insert(user)?;
        }
        Ok(repo)
    }

    fn position_of(users: &[User], name: &str) -> Option<usize> {
        users.iter().position(|user| user.has_name(name))
    }

    fn duplicate_error(name: &str) -> AppError {
        AppError::ConflictError(format!("User with the name '{}' already exists", name))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
        Ok(users.clone())
    }

    fn find_by_name(&self, name: &str) -> AppResult<Vec<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;

        Ok(users
            .iter()
            .filter(|user| user.has_name(name))
            .cloned()
            .collect())
    }

    fn find_one_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
        Ok(users.iter().find(|user| user.has_name(name)).cloned())
    }

    fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 잠금 실패")?;

        if Self::position_of(&users, &user.name).is_some() {
            return Err(Self::duplicate_error(&user.name));
        }

        users.push(user.clone());
        log::debug!("사용자 저장: {} (총 {}명)", user.name, users.len());

        Ok(user)
    }

    fn update(&self, name: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 잠금 실패")?;

        let Some(index) = Self::position_of(&users, name) else {
            return Ok(None);
        };

        // 자기 자신의 대소문자만 바꾸는 변경은 허용
        if let Some(new_name) = changes.name.as_deref() {
            let collides = users
                .iter()
                .enumerate()
                .any(|(i, user)| i != index && user.has_name(new_name));
            if collides {
                return Err(Self::duplicate_error(new_name));
            }
        }

        let user = &mut users[index];
        user.apply(changes);

        Ok(Some(user.clone()))
    }

    fn delete(&self, name: &str) -> AppResult<bool> {
        let mut users = self.users.write().context("사용자 저장소 쓰기 잠금 실패")?;

        match Self::position_of(&users, name) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> AppResult<usize> {
        let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
        Ok(users.len())
    }
}

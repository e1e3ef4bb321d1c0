//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 생성, 조회, 부분 수정, 삭제 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    UserService                      │
//! │  • 목록/필터 조회      • 생성 (이름 중복 거부)        │
//! │  • 단건 조회           • 부분 수정 (얕은 병합, 이름 변경) │
//! │  • 삭제                • Entity → DTO 변환            │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            Arc<dyn UserRepository>                  │
//! │  • InMemoryUserRepository (RwLock<Vec<User>>)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## 조회 키 규칙
//!
//! - 모든 단건 연산은 대소문자를 무시한 이름 완전 일치로 대상을 찾습니다.
//! - 이름은 대소문자 무시 기준으로 유일합니다.
//! - 이름 변경 후에는 새 이름으로만 조회됩니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::UserResponse,
        },
        entities::users::user::{User, UserChanges},
    },
    repositories::users::user_repo::UserRepository,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소를 명시적으로 소유하며, `main`에서 한 번 생성되어
/// `web::Data<UserService>`로 모든 워커에 공유됩니다.
///
/// ## 에러 처리 전략
///
/// - **NotFound**: 이름에 해당하는 사용자가 없음 (404)
/// - **ConflictError**: 이름 중복 (409)
/// - **InternalError**: 저장소 잠금 오류 (500)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::user_repo::InMemoryUserRepository;
///
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let created = service.create_user(request)?;
/// let found = service.list_users(Some("anshul"))?;
/// ```
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// 주어진 저장소를 사용하는 서비스 생성
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 사용자 목록 조회
    ///
    /// 필터가 없으면 전체 목록을 삽입 순서대로 반환하고,
    /// 필터가 있으면 이름이 대소문자 무시로 완전히 일치하는 사용자만 반환합니다.
    /// 결과가 비어 있어도 에러가 아닙니다.
    pub fn list_users(&self, name_filter: Option<&str>) -> AppResult<Vec<UserResponse>> {
        let users = match name_filter {
            Some(name) => {
                log::debug!("이름 필터로 사용자 조회: {}", name);
                self.user_repo.find_by_name(name)?
            }
            None => self.user_repo.find_all()?,
        };

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 이름으로 사용자 단건 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 이름의 사용자가 없음
    pub fn get_user(&self, name: &str) -> AppResult<UserResponse> {
        let user = self.user_repo
            .find_one_by_name(name)?
            .ok_or_else(|| Self::not_found(name))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 검증된 요청을 목록 끝에 추가하고, 저장된 레코드를 반환합니다.
    ///
    /// * `Err(AppError::ConflictError)` - 같은 이름(대소문자 무시)이 이미 존재
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let user = User::from(request);

        let created = self.user_repo.insert(user).inspect_err(|e| {
            log::warn!("사용자 생성 실패: {}", e);
        })?;

        log::info!("사용자 생성: {}", created.name);
        Ok(UserResponse::from(created))
    }

    /// 사용자 부분 수정
    ///
    /// 제공된 필드만 기존 레코드에 병합합니다. `name`이 제공되면 이름이 바뀌고,
    /// 이후에는 새 이름으로 조회됩니다.
    ///
    /// * `Err(AppError::NotFound)` - 해당 이름의 사용자가 없음 (저장소 변경 없음)
    /// * `Err(AppError::ConflictError)` - 다른 사용자의 이름으로 변경 시도
    pub fn update_user(&self, name: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let changes = UserChanges::from(request);

        if changes.is_empty() {
            log::debug!("변경 사항 없는 수정 요청: {}", name);
        }

        let updated = self.user_repo
            .update(name, changes)?
            .ok_or_else(|| Self::not_found(name))?;

        log::info!("사용자 수정: {} → {}", name, updated.name);
        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    ///
    /// * `Err(AppError::NotFound)` - 해당 이름의 사용자가 없음
    pub fn delete_user(&self, name: &str) -> AppResult<()> {
        if !self.user_repo.delete(name)? {
            return Err(Self::not_found(name));
        }

        log::info!("사용자 삭제: {}", name);
        Ok(())
    }

    /// 저장된 사용자 수
    pub fn user_count(&self) -> AppResult<usize> {
        self.user_repo.count()
    }

    fn not_found(name: &str) -> AppError {
        log::warn!("존재하지 않는 사용자: {}", name);
        AppError::NotFound(format!("User with the name '{}' does not exist", name))
    }
}

//! # Application Error Handling System
//!
//! 사용자 레지스트리 서비스의 통합 에러 처리 시스템입니다.
//! 모든 계층은 `AppError`를 반환하고, 핸들러에서는 `actix_web::ResponseError`
//! 구현을 통해 일관된 JSON 에러 응답으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 JSON |
//! | `NotFound` | 404 Not Found | 이름에 해당하는 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 이름 중복 |
//! | `InternalError` | 500 Internal Server Error | 저장소 잠금 오염 등 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: User with the name 'bob' does not exist" }
//! ```
//!
//! "찾을 수 없음"도 반드시 404 상태 코드로 응답합니다.
//! 200 상태 코드에 `error` 키를 담아 보내지 않습니다.

use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고,
/// `actix_web::ResponseError` 구현으로 HTTP 응답으로 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // 요청 DTO 검증
/// payload.validate()?;  // ValidationErrors → AppError::ValidationError
///
/// // 저장소 조회
/// let user = repo.find_one_by_name(name)?
///     .ok_or_else(|| AppError::NotFound(format!("User with the name '{}' does not exist", name)))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 클라이언트가 보낸 본문/쿼리/경로가 형식 요구사항을 만족하지 않을 때
    /// 발생합니다. 400 Bad Request로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 필수 필드 누락 (`name`, `age`, `isMarried`)
    /// - 타입 불일치 (`age`에 문자열 등)
    /// - 이름 길이 3자 미만
    /// - JSON 문법 오류
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 조회 키(대소문자 무시 이름)에 해당하는 사용자가 없을 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 존재하는 이름으로 생성하거나, 다른 사용자의 이름으로
    /// 변경하려 할 때 발생합니다. 409 Conflict로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 저장소 `RwLock` 오염 (다른 워커 스레드의 panic)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
    /// 5xx 에러는 서버 로그에 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

//! API 라우트 설정 모듈
//!
//! 사용자 레코드 엔드포인트와 헬스체크 엔드포인트를 등록하고,
//! 요청 추출기(JSON 본문, 쿼리 문자열)의 에러 처리를 설정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
//!
//! let app = App::new()
//!     .app_data(service.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::user_service::UserService;
use actix_web::{error, web, HttpRequest, HttpResponse};
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출기 에러도 `{"error": ...}` 형식으로 통일
    cfg.app_data(json_config()).app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /user` - 목록 조회 (`?name=` 필터 선택)
/// - `GET /user/{name}` - 단건 조회
/// - `POST /user` - 생성
/// - `PATCH /user/{name}`, `PUT /user/{name}` - 부분 수정
/// - `DELETE /user/{name}` - 삭제
///
/// ```bash
/// curl -X POST http://localhost:8080/user \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Anshul","age":21,"isMarried":false}'
///
/// curl "http://localhost:8080/user?name=anshul"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::replace_user)
            .service(handlers::users::delete_user)
    );
}

/// JSON 본문 파싱 실패를 400 `ValidationError`로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        error::Error::from(AppError::ValidationError(err.to_string()))
    })
}

/// 쿼리 문자열 파싱 실패를 400 `ValidationError`로 변환
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_registry_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "users": 2
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "users": service.user_count()?,
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App, http::StatusCode};
    use serde_json::Value;
    use crate::repositories::users::user_repo::InMemoryUserRepository;
    use super::*;

    #[actix_web::test]
    async fn test_health_check_reports_user_count() {
        let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
        let app = test::init_service(
            App::new().app_data(service.clone()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_registry_service");
        assert_eq!(body["users"], 0);
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let service = web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
        let app = test::init_service(
            App::new().app_data(service.clone()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

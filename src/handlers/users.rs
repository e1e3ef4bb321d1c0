//! # User Management HTTP Handlers
//!
//! 사용자 레코드 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/user?name=` | 목록 조회 (이름 필터 선택) | 200 OK | 400 |
//! | `GET` | `/user/{name}` | 단건 조회 | 200 OK | 404 |
//! | `POST` | `/user` | 사용자 생성 | 201 Created | 400, 409 |
//! | `PATCH` | `/user/{name}` | 부분 수정 | 200 OK | 400, 404, 409 |
//! | `PUT` | `/user/{name}` | 부분 수정 (PATCH와 동일) | 200 OK | 400, 404, 409 |
//! | `DELETE` | `/user/{name}` | 삭제 | 204 No Content | 404 |
//!
//! `{name}`은 대소문자를 무시한 조회 키입니다.
//!
//! ## 에러 응답
//!
//! 모든 실패는 적절한 4xx/5xx 상태 코드와 함께 다음 형식으로 응답합니다:
//!
//! ```json
//! { "error": "Not found: User with the name 'bob' does not exist" }
//! ```

use actix_web::{web, HttpResponse, get, post, patch, put, delete};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, ListUsersQuery, UpdateUserRequest};
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /user` 또는 `GET /user?name=anshul`
///
/// # 응답 (200 OK)
///
/// ```json
/// [
///   { "name": "Anshul", "age": 21, "isMarried": false }
/// ]
/// ```
///
/// 필터와 일치하는 사용자가 없으면 빈 배열을 반환합니다.
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users(query.name_filter().as_deref())?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// `GET /user/{name}`
#[get("/{name}")]
pub async fn get_user(
    service: web::Data<UserService>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&name)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /user`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Anshul", "age": 21, "gender": "male", "isMarried": false }
/// ```
///
/// # 응답
///
/// - 201 Created: 저장된 레코드 (요청과 동일)
/// - 400 Bad Request: 필수 필드 누락, 타입 불일치, 이름 3자 미만
/// - 409 Conflict: 같은 이름(대소문자 무시)이 이미 존재
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/user \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Anshul","age":21,"isMarried":false}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let user = service.create_user(payload.into_inner())?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 부분 수정 핸들러 (PATCH)
///
/// # 엔드포인트
///
/// `PATCH /user/{name}`
///
/// # 요청 본문
///
/// 변경할 필드만 포함합니다. `name`을 포함하면 이름이 바뀌며,
/// 이후에는 새 이름으로 조회해야 합니다.
///
/// ```json
/// { "age": 22 }
/// ```
///
/// # 응답
///
/// - 200 OK: 수정된 레코드
/// - 400 Bad Request: 제공된 필드의 검증 실패
/// - 404 Not Found: 해당 이름의 사용자 없음
/// - 409 Conflict: 다른 사용자의 이름으로 변경 시도
#[patch("/{name}")]
pub async fn update_user(
    service: web::Data<UserService>,
    name: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    apply_update(&service, &name, payload.into_inner())
}

/// 사용자 수정 핸들러 (PUT)
///
/// `PUT /user/{name}`. PATCH와 동일하게 제공된 필드만 병합합니다.
#[put("/{name}")]
pub async fn replace_user(
    service: web::Data<UserService>,
    name: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    apply_update(&service, &name, payload.into_inner())
}

fn apply_update(
    service: &UserService,
    name: &str,
    payload: UpdateUserRequest,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.update_user(name, payload)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /user/{name}`
///
/// # 응답
///
/// - 204 No Content: 삭제 성공 (본문 없음)
/// - 404 Not Found: 해당 이름의 사용자 없음
#[delete("/{name}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&name)?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, App, http::StatusCode};
    use serde_json::{json, Value};
    use crate::domain::entities::users::user::User;
    use crate::repositories::users::user_repo::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use super::*;

    fn service_with(users: Vec<User>) -> web::Data<UserService> {
        let repo = InMemoryUserRepository::with_users(users).unwrap();
        web::Data::new(UserService::new(Arc::new(repo)))
    }

    fn seed_users() -> Vec<User> {
        vec![
            User::new("Anshul".to_string(), 21, None, false),
            User::new("Aniket".to_string(), 22, None, false),
        ]
    }

    macro_rules! init_app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_end_to_end_example() {
        let service = service_with(vec![]);
        let app = init_app!(service);

        // 생성
        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Anshul", "age": 21, "isMarried": false }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "name": "Anshul", "age": 21, "isMarried": false }));
        assert_eq!(service.user_count().unwrap(), 1);

        // 대소문자 무시 필터
        let req = test::TestRequest::get().uri("/user?name=anshul").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([{ "name": "Anshul", "age": 21, "isMarried": false }]));

        // 부분 수정
        let req = test::TestRequest::patch()
            .uri("/user/Anshul")
            .set_json(json!({ "age": 22 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "name": "Anshul", "age": 22, "isMarried": false }));

        // 삭제
        let req = test::TestRequest::delete().uri("/user/Anshul").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(service.user_count().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_list_without_filter_keeps_insertion_order() {
        let service = service_with(vec![
            User::new("Anshul".to_string(), 21, None, false),
            User::new("Aniket".to_string(), 22, Some("male".to_string()), true),
        ]);
        let app = init_app!(service);

        let req = test::TestRequest::get().uri("/user").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!([
                { "name": "Anshul", "age": 21, "isMarried": false },
                { "name": "Aniket", "age": 22, "gender": "male", "isMarried": true }
            ])
        );
    }

    #[actix_web::test]
    async fn test_list_filter_is_exact_not_substring() {
        let service = service_with(vec![User::new("Anshul".to_string(), 21, None, false)]);
        let app = init_app!(service);

        let req = test::TestRequest::get().uri("/user?name=Ansh").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));

        let req = test::TestRequest::get().uri("/user?name=ANSHUL").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[actix_web::test]
    async fn test_empty_filter_lists_everything() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::get().uri("/user?name=").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().map(Vec::len), Some(2));
    }

    #[actix_web::test]
    async fn test_get_single_user() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::get().uri("/user/aniket").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "Aniket");

        let req = test::TestRequest::get().uri("/user/ghost").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_validation_failures() {
        let service = service_with(vec![]);
        let app = init_app!(service);

        let invalid_bodies = [
            json!({ "name": "An", "age": 21, "isMarried": false }),
            json!({ "name": "", "age": 21, "isMarried": false }),
            json!({ "name": "Anshul", "age": "21", "isMarried": false }),
            json!({ "name": "Anshul", "age": 21 }),
            json!({ "name": "Anshul", "age": 21, "isMarried": "no" }),
            json!({ "name": "Anshul", "age": 21, "gender": 7, "isMarried": false }),
            json!({ "age": 21, "isMarried": false }),
        ];

        for body in invalid_bodies {
            let req = test::TestRequest::post().uri("/user").set_json(&body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);

            let error: Value = test::read_body_json(resp).await;
            assert!(error["error"].is_string());
        }

        assert_eq!(service.user_count().unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_create_malformed_json() {
        let service = service_with(vec![]);
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/user")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: Value = test::read_body_json(resp).await;
        assert!(error["error"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_create_strips_unknown_fields() {
        let service = service_with(vec![]);
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "Anshul", "age": 21, "isMarried": false, "admin": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "name": "Anshul", "age": 21, "isMarried": false }));
    }

    #[actix_web::test]
    async fn test_create_duplicate_name_conflicts() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::post()
            .uri("/user")
            .set_json(json!({ "name": "anshul", "age": 40, "isMarried": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(service.user_count().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_update_missing_user_returns_not_found() {
        let service = service_with(seed_users());
        let app = init_app!(service);
        let before = service.list_users(None).unwrap();

        let req = test::TestRequest::patch()
            .uri("/user/ghost")
            .set_json(json!({ "age": 99 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("does not exist"));
        assert_eq!(service.list_users(None).unwrap(), before);
    }

    #[actix_web::test]
    async fn test_put_merges_like_patch() {
        let service = service_with(vec![User::new(
            "Anshul".to_string(),
            21,
            Some("male".to_string()),
            false,
        )]);
        let app = init_app!(service);

        let req = test::TestRequest::put()
            .uri("/user/anshul")
            .set_json(json!({ "isMarried": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({ "name": "Anshul", "age": 21, "gender": "male", "isMarried": true })
        );
    }

    #[actix_web::test]
    async fn test_update_rejects_invalid_fields() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::patch()
            .uri("/user/Anshul")
            .set_json(json!({ "name": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri("/user/Anshul")
            .set_json(json!({ "age": -3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_rename_and_conflicting_rename() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::patch()
            .uri("/user/Anshul")
            .set_json(json!({ "name": "Aniket" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::patch()
            .uri("/user/Anshul")
            .set_json(json!({ "name": "Arjun" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/user/arjun").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_delete_missing_user_returns_not_found() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::delete().uri("/user/ghost").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
        assert_eq!(service.user_count().unwrap(), 2);
    }

    #[actix_web::test]
    async fn test_delete_removes_exactly_one() {
        let service = service_with(seed_users());
        let app = init_app!(service);

        let req = test::TestRequest::delete().uri("/user/ANIKET").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let remaining = service.list_users(None).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Anshul");
    }
}

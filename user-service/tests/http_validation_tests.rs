//! HTTP-level tests for the request paths that are decided before any
//! database round trip: payload validation and bearer-token checks.
//! The pool is opened lazily and never connected.

use actix_web::{http::StatusCode, test, web, App, ResponseError};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use user_service::handlers;

fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/unreachable")
        .expect("lazy pool")
}

fn init_test_jwt() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        auth_core::jwt::initialize_jwt_secret("test-secret-for-http-tests").expect("jwt init");
    });
}

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool))
                .route("/health", web::get().to(handlers::health))
                .service(
                    web::scope("/api")
                        .route("/register", web::post().to(handlers::register))
                        .route("/login", web::post().to(handlers::login))
                        .service(
                            web::scope("/users")
                                .wrap(actix_middleware::JwtAuthMiddleware)
                                .service(
                                    web::resource("/{id}")
                                        .route(web::get().to(handlers::get_user))
                                        .route(web::put().to(handlers::update_user))
                                        .route(web::delete().to(handlers::delete_user)),
                                ),
                        ),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn health_returns_ok() {
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn register_rejects_invalid_email() {
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(serde_json::json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "pw123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn register_rejects_missing_field() {
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(serde_json::json!({ "username": "alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn register_rejects_empty_password() {
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": ""
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_rejects_empty_username() {
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({ "username": "", "password": "pw123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// The middleware rejects by returning Err, so these go through
// try_call_service and inspect the error's response status.

#[actix_web::test]
async fn users_require_authorization_header() {
    init_test_jwt();
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::get()
        .uri("/api/users/00000000-0000-0000-0000-000000000000")
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("request without a token must be rejected");

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn users_reject_non_bearer_scheme() {
    init_test_jwt();
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::delete()
        .uri("/api/users/00000000-0000-0000-0000-000000000000")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("non-bearer scheme must be rejected");

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn users_reject_garbage_token() {
    init_test_jwt();
    let app = test_app!(lazy_pool());

    let req = test::TestRequest::get()
        .uri("/api/users/00000000-0000-0000-0000-000000000000")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let err = test::try_call_service(&app, req)
        .await
        .expect_err("garbage token must be rejected");

    assert_eq!(
        err.as_response_error().status_code(),
        StatusCode::UNAUTHORIZED
    );
}

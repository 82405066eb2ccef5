mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

use common::{PASSWORD, USERNAME, send_request, spawn_app};

#[tokio::test]
async fn test_login_issues_verifiable_token() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/login",
            None,
            Some(json!({"username": USERNAME, "password": PASSWORD})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);
    assert!(body.get("refresh_token").is_none());
    let token = body["access_token"].as_str().unwrap();
    assert_eq!(app.tokens.verify(token).unwrap().username, USERNAME);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/login",
            None,
            Some(json!({"username": USERNAME, "password": "nope"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The user credentials were incorrect.");
    assert_eq!(body["type"], "error");
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_login_with_malformed_body() {
    let app = spawn_app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send_request(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request payload");
}

#[tokio::test]
async fn test_logout_requires_valid_token() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(Method::POST, "/api/v1/logout", Some(&app.token()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully logged out");
    assert_eq!(body["code"], 200);

    let (status, body) = app
        .send(Method::POST, "/api/v1/logout", Some("forged"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = spawn_app().await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send_request(&app.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = app.send(Method::GET, "/api/v1/nowhere", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

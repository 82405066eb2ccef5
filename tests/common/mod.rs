//! Shared fixtures for the router-level tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use courier_backend::modules::auth::service::TokenService;
use courier_backend::modules::orders::infra::persistence::InMemoryOrderRepository;
use courier_backend::modules::orders::repository::OrderRepository;
use courier_backend::modules::users::infra::persistence::InMemoryUserRepository;
use courier_backend::modules::users::repository::UserRepository;
use courier_backend::routers::init_router;
use courier_backend::shared::{config::Config, repository::RepositoryManager, state::AppState};

pub const USERNAME: &str = "merchant";
pub const PASSWORD: &str = "s3cret";

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<TokenService>,
    pub orders: InMemoryOrderRepository,
    pub users: InMemoryUserRepository,
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        database_max_connections: 1,
        database_min_connections: 1,
        database_connect_timeout: 1,
        database_idle_timeout: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        rust_log: "debug".to_string(),
        app_env: "test".to_string(),
        jwt_secret: "integration-secret".to_string(),
        jwt_issuer: "courier-backend".to_string(),
        jwt_expires_in: 3600,
        seed_username: None,
        seed_password: None,
    }
}

/// App backed by in-memory repositories with one registered merchant.
pub async fn spawn_app() -> TestApp {
    let config = test_config();
    let users = InMemoryUserRepository::new();
    users.insert(USERNAME, PASSWORD).await.unwrap();
    let orders = InMemoryOrderRepository::new(users.clone());

    let mut manager = RepositoryManager::new();
    manager.register::<Arc<dyn UserRepository>>(Arc::new(users.clone()));
    manager.register::<Arc<dyn OrderRepository>>(Arc::new(orders.clone()));

    let tokens = Arc::new(TokenService::from_config(&config));
    let state = AppState {
        config: Arc::new(config),
        token_service: tokens.clone(),
        repo_manager: Arc::new(manager),
    };

    TestApp {
        router: init_router(state),
        tokens,
        orders,
        users,
    }
}

impl TestApp {
    pub fn token(&self) -> String {
        self.tokens.issue(USERNAME).unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        send_request(&self.router, request).await
    }
}

pub async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub fn order_body(city: i64, weight: f64, amount: f64) -> Value {
    serde_json::json!({
        "store_id": 131172,
        "merchant_order_id": "INV-2024-0001",
        "recipient_name": "Abdul Karim",
        "recipient_phone": "01712345678",
        "recipient_address": "House 12, Road 4, Banani",
        "recipient_city": city,
        "recipient_zone": 3,
        "recipient_area": 17,
        "delivery_type": 48,
        "item_type": 2,
        "special_instruction": "",
        "item_quantity": 1,
        "item_weight": weight,
        "amount_to_collect": amount,
        "item_description": "Cotton shirts"
    })
}

#![allow(dead_code)]

use auth_server::config::Config;
use auth_server::database::{sync_schema, try_connect, PgConnector};
use auth_server::routes::create_routes;
use auth_server::state::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tower::ServiceExt;

pub fn test_config(db_url: &str) -> Config {
    Config::from_lookup(|key| match key {
        "DB_URI" => Some(db_url.to_string()),
        "RUST_ENV" => Some("test".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Sends one request through a fresh copy of the router and decodes the JSON body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// A throwaway Postgres with the schema applied.
pub struct TestContext {
    pub pool: PgPool,
    pub app: Router,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);
        let config = test_config(&db_url);

        let pool = try_connect(&PgConnector::from_config(&config), &config)
            .await
            .expect("Failed to connect to test database");
        sync_schema(&pool).await.expect("Failed to apply schema");

        TestContext {
            app: create_routes(AppState::new(pool.clone(), config)),
            pool,
            _container: container,
        }
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send(self.app.clone(), Method::POST, uri, Some(body)).await
    }
}

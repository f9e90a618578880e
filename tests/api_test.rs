//! Database-backed integration tests.
//!
//! These run against a real PostgreSQL instance named by the
//! `CATALOG_TEST_DATABASE_URL` environment variable; when it is unset every
//! test returns early, so the suite is safe to run without a database.
//! Each test registers its own users with unique email addresses, so the
//! suite can run in parallel against a shared database without cleanup.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::router::build_router;
use catalog_api::state::AppState;
use catalog_auth::jwt::{JwtDecoder, JwtEncoder};
use catalog_auth::password::PasswordHasher;
use catalog_core::config::{AppConfig, AuthConfig, DatabaseConfig};
use catalog_database::repositories::{ProductRepository, UserRepository};

struct TestApp {
    router: Router,
}

impl TestApp {
    /// Connect to the test database and build the full application router.
    /// Returns `None` when `CATALOG_TEST_DATABASE_URL` is unset.
    async fn new() -> Option<Self> {
        let url = std::env::var("CATALOG_TEST_DATABASE_URL").ok()?;

        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 0,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                jwt_secret: "api-test-secret".to_string(),
                jwt_access_ttl_minutes: 15,
                jwt_refresh_ttl_hours: 24,
            },
            logging: Default::default(),
        };

        let db_pool = catalog_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        catalog_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState {
            user_repo: Arc::new(UserRepository::new(db_pool.clone())),
            product_repo: Arc::new(ProductRepository::new(db_pool)),
            password_hasher: Arc::new(PasswordHasher::new()),
            jwt_encoder: Arc::new(JwtEncoder::new(&config.auth)),
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
        };

        Some(Self {
            router: build_router(state),
        })
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let response = self
            .router
            .clone()
            .oneshot(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    /// Register a user and return their email.
    async fn register(&self, tag: &str) -> String {
        let email = unique_email(tag);
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": tag,
                    "email": email,
                    "password": "password123",
                })),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "Registration failed: {body:?}");
        email
    }

    /// Login and return the JWT access token.
    async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": "password123",
                })),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "Login failed: {body:?}");
        body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a product and return its response body.
    async fn create_product(&self, token: &str, body: Value) -> Value {
        let (status, body) = self
            .request("POST", "/api/products", Some(body), Some(token))
            .await;
        assert_eq!(status, StatusCode::CREATED, "Create failed: {body:?}");
        body["data"].clone()
    }
}

fn unique_email(tag: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before epoch")
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{tag}-{nanos}-{n}@test.com")
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = app.register("dup").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "dup again",
                "email": email,
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 409);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn case_variant_email_registration_conflicts() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = app.register("case").await;

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "case variant",
                "email": email.to_uppercase(),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_login_and_product_flow() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let email = app.register("flow").await;
    let token = app.login(&email).await;

    let created = app
        .create_product(
            &token,
            serde_json::json!({
                "name": "Widget",
                "description": "A widget",
                "price": "19.99",
            }),
        )
        .await;
    assert_eq!(created["name"], "Widget");
    assert_eq!(created["price"], "19.99");

    let (status, body) = app.request("GET", "/api/products", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["id"], created["id"]);

    let path = format!("/api/products/{}", created["id"]);
    let (status, body) = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Widget");
}

#[tokio::test]
async fn product_of_another_user_behaves_like_missing() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let owner_token = app.login(&app.register("owner").await).await;
    let other_token = app.login(&app.register("other").await).await;

    let created = app
        .create_product(&owner_token, serde_json::json!({"name": "Private"}))
        .await;
    let path = format!("/api/products/{}", created["id"]);

    let (status, _) = app.request("GET", &path, None, Some(&other_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({"name": "Stolen"})),
            Some(&other_token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request("DELETE", &path, None, Some(&other_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Still intact and unchanged for its owner.
    let (status, body) = app.request("GET", &path, None, Some(&owner_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Private");
}

#[tokio::test]
async fn partial_update_preserves_unsupplied_fields() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let token = app.login(&app.register("patch").await).await;

    let created = app
        .create_product(
            &token,
            serde_json::json!({
                "name": "Gadget",
                "description": "Original description",
                "price": "5.00",
            }),
        )
        .await;
    let path = format!("/api/products/{}", created["id"]);

    let (status, body) = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({"price": "7.50"})),
            Some(&token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let updated = &body["data"];
    assert_eq!(updated["price"], "7.50");
    assert_eq!(updated["name"], "Gadget");
    assert_eq!(updated["description"], "Original description");
    assert_ne!(updated["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn empty_update_leaves_row_untouched() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let token = app.login(&app.register("noop").await).await;

    let created = app
        .create_product(
            &token,
            serde_json::json!({"name": "Static", "price": "3.00"}),
        )
        .await;
    let path = format!("/api/products/{}", created["id"]);

    let (status, body) = app
        .request("PUT", &path, Some(serde_json::json!({})), Some(&token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Static");
    assert_eq!(body["data"]["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn delete_removes_product_from_listing() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let token = app.login(&app.register("del").await).await;

    let created = app
        .create_product(&token, serde_json::json!({"name": "Ephemeral"}))
        .await;
    let path = format!("/api/products/{}", created["id"]);

    let (status, body) = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");

    let (status, _) = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

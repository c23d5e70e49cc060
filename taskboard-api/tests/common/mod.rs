/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup and cleanup
/// - JWT token generation for synthetic users
/// - API request helpers
///
/// Integration tests need a running PostgreSQL instance. When
/// `DATABASE_URL` is not set the tests skip themselves instead of
/// failing, so the unit suite stays runnable without infrastructure.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use taskboard_shared::auth::jwt::{create_token, Claims};
use tower::Service as _;
use uuid::Uuid;

/// Shared secret for test tokens; long enough to pass config validation
const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef0123456789abcdef";

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    /// Identity of the primary test user
    pub user_id: Uuid,
    pub jwt_token: String,
}

impl TestContext {
    /// Creates a new test context against the database in `DATABASE_URL`
    ///
    /// Returns `None` (skip) when `DATABASE_URL` is not set.
    pub async fn new() -> anyhow::Result<Option<Self>> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set; skipping integration test");
            return Ok(None);
        };

        let db = PgPool::connect(&database_url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: 5,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
        };

        // Each context gets a fresh user id, so tests are isolated even
        // against a shared database
        let user_id = Uuid::new_v4();
        let jwt_token = create_token(&Claims::new(user_id), TEST_JWT_SECRET)?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(Some(TestContext {
            db,
            app,
            user_id,
            jwt_token,
        }))
    }

    /// Mints a token for a second, unrelated user
    pub fn other_user_token(&self) -> anyhow::Result<(Uuid, String)> {
        let other_id = Uuid::new_v4();
        let token = create_token(&Claims::new(other_id), TEST_JWT_SECRET)?;
        Ok((other_id, token))
    }

    /// Cleans up test data
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        // Tasks go with their projects via the FK cascade
        sqlx::query("DELETE FROM projects WHERE owner_id = $1")
            .bind(self.user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    /// Sends a request and returns status plus parsed JSON body
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.app.clone().call(request).await?;
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, json))
    }
}

/// Helper to create a project for the primary user, returning its id
pub async fn create_test_project(ctx: &TestContext, name: &str) -> anyhow::Result<Uuid> {
    let (status, body) = ctx
        .send(
            "POST",
            "/projects",
            Some(&ctx.jwt_token),
            Some(serde_json::json!({ "name": name })),
        )
        .await?;

    anyhow::ensure!(
        status == StatusCode::CREATED,
        "project creation failed: {} {}",
        status,
        body
    );

    let id = body["id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("missing project id in {}", body))?;
    Ok(Uuid::parse_str(id)?)
}

/// Helper to create a task under a project, returning its id
pub async fn create_test_task(
    ctx: &TestContext,
    project_id: Uuid,
    title: &str,
) -> anyhow::Result<Uuid> {
    let (status, body) = ctx
        .send(
            "POST",
            &format!("/projects/{}/tasks", project_id),
            Some(&ctx.jwt_token),
            Some(serde_json::json!({ "title": title })),
        )
        .await?;

    anyhow::ensure!(
        status == StatusCode::CREATED,
        "task creation failed: {} {}",
        status,
        body
    );

    let id = body["id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("missing task id in {}", body))?;
    Ok(Uuid::parse_str(id)?)
}

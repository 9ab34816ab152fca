use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use demo_intake::config::{Config, SendyConfig};
use demo_intake::models::FormSubmission;

pub const TEST_LIST_ID: &str = "test-list";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn intake_url(&self) -> String {
        self.url("/v1/submit-demo-request")
    }

    /// POST a JSON demo request, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.intake_url())
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// All audit rows, oldest first.
    pub async fn records(&self) -> Vec<FormSubmission> {
        sqlx::query_as::<_, FormSubmission>(
            "SELECT * FROM form_submissions ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .expect("failed to read form_submissions")
    }
}

pub fn john_smith() -> Value {
    json!({
        "fullName": "John Smith",
        "companyEmail": "john@acme.com",
        "phoneNumber": "+15550000000",
    })
}

/// Spawn a test app with a fresh temporary database, forwarding to
/// `sendy_base_url` + `/subscribe`.
pub async fn spawn_app(sendy_base_url: &str) -> TestApp {
    spawn_app_with_body_limit(sendy_base_url, 1_048_576).await
}

pub async fn spawn_app_with_body_limit(sendy_base_url: &str, max_body_size: usize) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("intake_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    // Connect to default postgres DB to create test DB
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size,
        log_level: "warn".to_string(),
        sendy: SendyConfig {
            subscribe_url: format!("{sendy_base_url}/subscribe"),
            list_id: TEST_LIST_ID.to_string(),
            timeout: Some(Duration::from_secs(5)),
        },
    };

    let app = demo_intake::build_app(pool.clone(), config).expect("Failed to build app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// An address nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

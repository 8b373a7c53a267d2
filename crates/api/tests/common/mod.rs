#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers_modules::mongo::Mongo;
use tower::ServiceExt;

use roster_api::config::ServerConfig;
use roster_api::router::build_app_router;
use roster_api::state::AppState;

/// A MongoDB URI nothing listens on, with short timeouts so requests that
/// touch the database fail quickly.
pub const UNREACHABLE_MONGO_URI: &str =
    "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(mongo_uri: &str, db_name: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongo_uri: mongo_uri.to_string(),
        db_name: db_name.to_string(),
        collection_name: "users".to_string(),
    }
}

/// Build the full application router against the given MongoDB.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub async fn build_test_app(mongo_uri: &str, db_name: &str) -> Router {
    let config = test_config(mongo_uri, db_name);
    let client = roster_db::create_client(mongo_uri)
        .await
        .expect("Failed to create MongoDB client");

    let state = AppState {
        client,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Router whose database is unreachable.
pub async fn build_offline_app() -> Router {
    build_test_app(UNREACHABLE_MONGO_URI, "test").await
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Live MongoDB (testcontainers)
// ---------------------------------------------------------------------------

static MONGO_URI: OnceLock<String> = OnceLock::new();

/// Docker container ID, removed by the `atexit` hook.
static CONTAINER_ID: OnceLock<String> = OnceLock::new();

extern "C" {
    fn atexit(f: extern "C" fn()) -> i32;
}

/// Runs on process exit: the parked container never drops, so remove it here.
extern "C" fn remove_container() {
    if let Some(id) = CONTAINER_ID.get() {
        let _ = std::process::Command::new("docker")
            .args(["rm", "-f", id])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status();
    }
}

/// Connection string of a `mongo:7.0` container shared by the test binary.
///
/// The container lives on its own thread and runtime so it outlives each
/// `#[tokio::test]` runtime. It is removed when the test binary exits, and
/// the URI is only handed out once the server answers a ping.
pub fn shared_mongo_uri() -> &'static str {
    MONGO_URI.get_or_init(|| {
        let (tx, rx) = std::sync::mpsc::sync_channel(1);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create container runtime");

            rt.block_on(async {
                let container = Mongo::default()
                    .with_tag("7.0")
                    .start()
                    .await
                    .expect("Failed to start MongoDB container");

                let _ = CONTAINER_ID.set(container.id().to_string());
                unsafe {
                    atexit(remove_container);
                }

                let host = container.get_host().await.expect("Failed to get host");
                let port = container
                    .get_host_port_ipv4(27017)
                    .await
                    .expect("Failed to get port");
                let uri = format!("mongodb://{host}:{port}");

                let ready_client = roster_db::create_client(&uri)
                    .await
                    .expect("Failed to create readiness client");
                for _ in 0..30 {
                    if roster_db::health_check(&ready_client).await.is_ok() {
                        break;
                    }
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
                drop(ready_client);

                tx.send(uri).expect("Failed to send connection string");

                std::future::pending::<()>().await;
            });
        });

        rx.recv().expect("Failed to receive connection string")
    })
}

/// A unique database name per test.
pub fn unique_db_name() -> String {
    format!("roster_api_{}", &uuid::Uuid::new_v4().simple().to_string()[..8])
}

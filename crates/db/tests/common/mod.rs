//! Shared MongoDB container for the repository integration tests.
//!
//! One `mongo:7.0` container is started per test binary on a dedicated thread
//! with its own runtime, so it outlives each `#[tokio::test]` runtime. Tests
//! isolate themselves by suffixing database names with a short UUID.

#![allow(dead_code)]

use std::sync::OnceLock;

use mongodb::bson::Document;
use mongodb::{Client, Collection};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers_modules::mongo::Mongo;

static CONNECTION_STRING: OnceLock<String> = OnceLock::new();

/// Docker container ID, removed by the `atexit` hook.
static CONTAINER_ID: OnceLock<String> = OnceLock::new();

extern "C" {
    fn atexit(f: extern "C" fn()) -> i32;
}

extern "C" fn remove_container() {
    if let Some(id) = CONTAINER_ID.get() {
        let _ = std::process::Command::new("docker")
            .args(["rm", "-f", id])
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status();
    }
}

fn shared_connection_string() -> &'static str {
    CONNECTION_STRING.get_or_init(|| {
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

                let ready_client = Client::with_uri_str(&uri).await.expect("Failed to create readiness client");
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

/// A client on the shared container plus a per-test database name.
pub struct TestMongo {
    pub client: Client,
    pub uri: String,
    pub db_name: String,
}

impl TestMongo {
    pub async fn start() -> Self {
        let uri = shared_connection_string().to_string();
        let client = roster_db::create_client(&uri)
            .await
            .expect("Failed to create client");
        let suffix = uuid::Uuid::new_v4().to_string()[..8].to_string();

        Self {
            client,
            uri,
            db_name: format!("roster_{suffix}"),
        }
    }

    pub fn users(&self) -> Collection<Document> {
        roster_db::users_collection(&self.client, &self.db_name, "users")
    }
}

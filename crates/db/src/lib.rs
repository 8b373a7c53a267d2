//! MongoDB access for the users export.
//!
//! Owns client construction, the health ping, and the read path that fetches
//! user documents and maps them into [`roster_core::export::RawRecord`]s.

use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

pub mod models;
pub mod repositories;

pub type DbClient = mongodb::Client;

/// Errors raised by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Create a client from a MongoDB connection string.
///
/// The driver connects lazily, so an unreachable server only surfaces on the
/// first operation. Malformed URIs (and failed SRV lookups) fail here.
pub async fn create_client(uri: &str) -> Result<DbClient, DbError> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client)
}

/// Round-trip a `ping` to the server.
pub async fn health_check(client: &DbClient) -> Result<(), DbError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}

/// Untyped handle to the collection holding user documents.
pub fn users_collection(
    client: &DbClient,
    database: &str,
    collection: &str,
) -> Collection<Document> {
    client.database(database).collection::<Document>(collection)
}

//! Repository for the user documents collection.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::Collection;
use roster_core::export::RawRecord;

use crate::models::user_record::{projection, raw_record_from_document};
use crate::DbError;

/// Read access to user documents for export.
pub struct UserRecordRepo;

impl UserRecordRepo {
    /// Fetch every document in the collection, projected to the exported
    /// fields and without `_id`.
    ///
    /// No filter and no sort: documents arrive in storage order and the
    /// whole result set is materialized before returning.
    pub async fn list_all(collection: &Collection<Document>) -> Result<Vec<Document>, DbError> {
        let mut find_options = FindOptions::default();
        find_options.projection = Some(projection());

        let cursor = collection.find(doc! {}).with_options(find_options).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(
            collection = %collection.name(),
            count = docs.len(),
            "Fetched user documents",
        );

        Ok(docs)
    }

    /// Fetch every document and map it into a [`RawRecord`], keeping order.
    pub async fn list_raw_records(
        collection: &Collection<Document>,
    ) -> Result<Vec<RawRecord>, DbError> {
        let docs = Self::list_all(collection).await?;
        Ok(docs.iter().map(raw_record_from_document).collect())
    }
}

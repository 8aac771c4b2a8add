use async_trait::async_trait;
use serde_json::Value;

use crate::db::models::{Pagination, SortSpec};
use crate::error::AppError;

/// Repository trait for read-only feed queries.
///
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Fetch one page of the feed: sorted by `sort`, skipping
    /// `page.offset` documents and returning at most `page.limit`, with
    /// the storage identifier stripped from every element.
    ///
    /// Documents with equal sort-key values come back in whatever order
    /// the server picks; callers must not rely on tie order. An `offset`
    /// past the end of the collection yields an empty vec, not an error.
    async fn find_page(&self, sort: &SortSpec, page: Pagination) -> Result<Vec<Value>, AppError>;

    /// Fetch every document in the collection, identifier stripped, in
    /// whatever order the server returns them.
    async fn find_all(&self) -> Result<Vec<Value>, AppError>;
}

/// MongoDB implementation of the FeedRepository.
///
/// One instance per collection; the sort spec is supplied per call by
/// whichever endpoint owns the binding, so the pagination query exists
/// exactly once no matter how many feeds are served.
pub struct MongoFeedRepository {
    collection: mongodb::Collection<mongodb::bson::Document>,
}

impl MongoFeedRepository {
    pub fn new(db: &mongodb::Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }

    async fn drain(
        mut cursor: mongodb::Cursor<mongodb::bson::Document>,
    ) -> Result<Vec<Value>, AppError> {
        use futures::TryStreamExt;
        use mongodb::bson::Bson;

        let mut documents = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            documents.push(Bson::Document(doc).into_relaxed_extjson());
        }

        Ok(documents)
    }
}

#[async_trait]
impl FeedRepository for MongoFeedRepository {
    async fn find_page(&self, sort: &SortSpec, page: Pagination) -> Result<Vec<Value>, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .sort(sort.to_document())
            .skip(page.offset)
            .limit(page.limit)
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Self::drain(cursor).await
    }

    async fn find_all(&self) -> Result<Vec<Value>, AppError> {
        use mongodb::bson::doc;
        use mongodb::options::FindOptions;

        let options = FindOptions::builder().projection(doc! { "_id": 0 }).build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Self::drain(cursor).await
    }
}

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

/// Repository trait for the user directory.
///
/// Lives beside [`FeedRepository`](crate::db::repository::FeedRepository)
/// but is deliberately separate: the users service is an independent
/// deployment with its own database binding and shares no state with the
/// feeds.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user document, identifier stripped, in server order.
    async fn list_all(&self) -> Result<Vec<Value>, AppError>;
}

/// MongoDB implementation of the UserRepository.
pub struct MongoUserRepository {
    collection: mongodb::Collection<mongodb::bson::Document>,
}

impl MongoUserRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list_all(&self) -> Result<Vec<Value>, AppError> {
        use futures::TryStreamExt;
        use mongodb::bson::{doc, Bson};
        use mongodb::options::FindOptions;

        let options = FindOptions::builder().projection(doc! { "_id": 0 }).build();

        let mut cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(doc) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            users.push(Bson::Document(doc).into_relaxed_extjson());
        }

        Ok(users)
    }
}

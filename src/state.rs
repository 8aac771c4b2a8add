use std::sync::Arc;

use crate::db::models::SortSpec;
use crate::db::repository::FeedRepository;
use crate::db::users_repository::UserRepository;

/// One feed endpoint's fixed configuration: the collection to read
/// (behind the repository) and how to order it.
#[derive(Clone)]
pub struct FeedBinding {
    pub repo: Arc<dyn FeedRepository>,
    pub sort: SortSpec,
}

impl FeedBinding {
    /// Newsfeed ordering: newest `created_date` first.
    pub fn news(repo: Arc<dyn FeedRepository>) -> Self {
        Self {
            repo,
            sort: SortSpec::descending("created_date"),
        }
    }

    /// Trending movies ordering: newest insert first, by storage id.
    /// The collection carries no semantic timestamp; `_id` assignment
    /// tracks insertion order.
    pub fn movies(repo: Arc<dyn FeedRepository>) -> Self {
        Self {
            repo,
            sort: SortSpec::descending("_id"),
        }
    }
}

/// State for the main feed service (`newsque-api`).
#[derive(Clone)]
pub struct FeedState {
    pub news: FeedBinding,
    pub movies: FeedBinding,
}

/// State for the legacy resources service (`resources-api`).
#[derive(Clone)]
pub struct ResourcesState {
    pub resources: Arc<dyn FeedRepository>,
}

/// State for the user-listing service (`users-api`).
#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UserRepository>,
}

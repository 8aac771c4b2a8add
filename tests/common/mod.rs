use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use mongodb::bson::Document;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::mongo::Mongo;
use tower_http::services::ServeDir;

use newsque::api;
use newsque::db::repository::{FeedRepository, MongoFeedRepository};
use newsque::db::users_repository::{MongoUserRepository, UserRepository};
use newsque::state::{FeedBinding, FeedState, ResourcesState, UsersState};

/// Holds the running MongoDB container and routers for all three
/// services, wired exactly like the binaries.
///
/// The container is kept alive for as long as this struct lives. When
/// dropped, it is stopped and cleaned up automatically.
pub struct TestEnv {
    _mongo: ContainerAsync<Mongo>,
    pub db: mongodb::Database,
    pub users_db: mongodb::Database,
    pub feed_router: Router,
    pub resources_router: Router,
    pub users_router: Router,
}

impl TestEnv {
    /// Spin up MongoDB and build the three service routers against it.
    pub async fn start() -> Self {
        let mongo_container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let mongo_port = mongo_container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");
        let mongo_uri = format!("mongodb://127.0.0.1:{}", mongo_port);
        let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
            .await
            .expect("Failed to connect to MongoDB");

        // The feed and resources services share one database; the users
        // service binds its own, as in production.
        let db = mongo_client.database("newsque_test");
        let users_db = mongo_client.database("accounts_test");

        let news_repo: Arc<dyn FeedRepository> =
            Arc::new(MongoFeedRepository::new(&db, "newsque_resource"));
        let movies_repo: Arc<dyn FeedRepository> =
            Arc::new(MongoFeedRepository::new(&db, "trending_IN"));

        let feed_state = FeedState {
            news: FeedBinding::news(news_repo),
            movies: FeedBinding::movies(movies_repo),
        };
        let feed_router = Router::new()
            .route("/v1/newsfeed", get(api::feed::newsfeed_handler))
            .route("/v1/moviesfeed", get(api::feed::moviesfeed_handler))
            .fallback_service(ServeDir::new("static"))
            .with_state(feed_state);

        let resources: Arc<dyn FeedRepository> =
            Arc::new(MongoFeedRepository::new(&db, "newsque_resource"));
        let resources_router = Router::new()
            .route("/api/resources", get(api::resources::resources_handler))
            .with_state(ResourcesState { resources });

        let users: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&users_db));
        let users_router = Router::new()
            .route("/api/users", get(api::users::users_handler))
            .with_state(UsersState { users });

        Self {
            _mongo: mongo_container,
            db,
            users_db,
            feed_router,
            resources_router,
            users_router,
        }
    }

    pub fn feed_server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.feed_router.clone())
    }

    /// Feed server that does NOT expect success by default (for error tests).
    pub fn feed_server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.feed_router.clone())
    }

    pub fn resources_server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.resources_router.clone())
    }

    pub fn users_server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.users_router.clone())
    }

    /// Seed the news collection with one article per `created_date`
    /// value, inserted in the given order.
    pub async fn seed_news(&self, created_dates: &[i64]) {
        let docs: Vec<Document> = created_dates
            .iter()
            .map(|date| {
                let mut doc = Document::new();
                doc.insert("title", format!("article-{date}"));
                doc.insert("abstract", format!("Abstract for article {date}"));
                doc.insert("created_date", *date);
                doc
            })
            .collect();

        self.db
            .collection::<Document>("newsque_resource")
            .insert_many(docs)
            .await
            .expect("Failed to seed news collection");
    }

    /// Seed the movies collection one document at a time; sequential
    /// inserts give monotonically increasing `_id`s, which is the order
    /// the feed sorts on.
    pub async fn seed_movies(&self, titles: &[&str]) {
        for title in titles {
            let mut doc = Document::new();
            doc.insert("title", *title);
            doc.insert("overview", format!("Overview of {title}"));
            doc.insert("vote_average", 7.5);
            self.db
                .collection::<Document>("trending_IN")
                .insert_one(doc)
                .await
                .expect("Failed to seed movies collection");
        }
    }

    pub async fn seed_users(&self, names: &[&str]) {
        let docs: Vec<Document> = names
            .iter()
            .map(|name| {
                let mut doc = Document::new();
                doc.insert("name", *name);
                doc.insert("email", format!("{name}@example.com"));
                doc
            })
            .collect();

        self.users_db
            .collection::<Document>("users")
            .insert_many(docs)
            .await
            .expect("Failed to seed users collection");
    }
}

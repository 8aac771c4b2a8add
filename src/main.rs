#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::routing::get;
    use axum::Router;
    use newsque::api;
    use newsque::db::repository::{FeedRepository, MongoFeedRepository};
    use newsque::state::{FeedBinding, FeedState};
    use tower_http::services::ServeDir;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsque=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting newsque feed server...");

    // Connect to MongoDB. An unreachable server only surfaces once the
    // first query runs; nothing is dialed here.
    let mongo_uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongo_db_name =
        std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "newsque".to_string());
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
        .await
        .expect("Invalid MongoDB URI");
    let db = mongo_client.database(&mongo_db_name);

    tracing::info!("Using MongoDB at {}", mongo_uri);

    let news_repo: Arc<dyn FeedRepository> =
        Arc::new(MongoFeedRepository::new(&db, "newsque_resource"));
    let movies_repo: Arc<dyn FeedRepository> =
        Arc::new(MongoFeedRepository::new(&db, "trending_IN"));

    let state = FeedState {
        news: FeedBinding::news(news_repo),
        movies: FeedBinding::movies(movies_repo),
    };

    // Build the Axum router
    let app = Router::new()
        .route("/v1/newsfeed", get(api::feed::newsfeed_handler))
        .route("/v1/moviesfeed", get(api::feed::moviesfeed_handler))
        // Landing page and assets
        .fallback_service(ServeDir::new(&static_dir))
        .with_state(state);

    // Start the server
    tracing::info!("Listening on http://{}", listen_addr);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

//! Legacy resources service: the original unpaginated dump of the news
//! collection, kept as its own deployable so existing consumers keep
//! working.

#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::routing::get;
    use axum::Router;
    use newsque::api;
    use newsque::db::repository::{FeedRepository, MongoFeedRepository};
    use newsque::state::ResourcesState;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "newsque=info".into()),
        )
        .init();

    tracing::info!("Starting legacy resources server...");

    let mongo_uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let mongo_db_name =
        std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "newsque".to_string());
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    let mongo_client = mongodb::Client::with_uri_str(&mongo_uri)
        .await
        .expect("Invalid MongoDB URI");
    let db = mongo_client.database(&mongo_db_name);

    let resources: Arc<dyn FeedRepository> =
        Arc::new(MongoFeedRepository::new(&db, "newsque_resource"));

    let app = Router::new()
        .route("/api/resources", get(api::resources::resources_handler))
        .with_state(ResourcesState { resources });

    tracing::info!("Listening on http://{}", listen_addr);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

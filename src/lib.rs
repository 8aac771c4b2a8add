pub mod api {
    pub mod errors;
    pub mod feed;
    pub mod resources;
    pub mod users;
}
pub mod db {
    pub mod models;
    pub mod repository;
    pub mod users_repository;
}
pub mod error;
pub mod state;

use thiserror::Error;

/// Application-wide error types.
///
/// Every failure a request can hit is one of these two kinds before it
/// crosses the HTTP boundary. Keeping them distinct leaves the seam open
/// for mapping client faults to 400 later, even though both currently
/// collapse into the same generic 500.
#[derive(Debug, Error)]
pub enum AppError {
    /// Query-string pagination input that failed integer parsing.
    #[error("Invalid query input: {0}")]
    ClientInput(String),

    /// Any storage-layer failure: connectivity, query execution, decoding.
    #[error("Database error: {0}")]
    Database(String),
}

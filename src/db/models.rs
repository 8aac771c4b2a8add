use std::collections::HashMap;

use mongodb::bson::Document;

use crate::error::AppError;

const DEFAULT_OFFSET: u64 = 0;
const DEFAULT_LIMIT: i64 = 3;

/// An offset/limit window over a feed collection.
///
/// Built from raw query-string values so that non-numeric input surfaces
/// as a handled [`AppError::ClientInput`] instead of a framework-level
/// rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of leading documents to skip.
    pub offset: u64,
    /// Maximum number of documents to return. Passed to the server
    /// verbatim, so `0` means "no limit" there.
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Parse `offset` and `limit` from raw query parameters.
    ///
    /// Absent parameters fall back to `offset=0, limit=3`. Values that
    /// fail integer parsing (including negative offsets) are reported as
    /// [`AppError::ClientInput`].
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let offset = match params.get("offset") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ClientInput(format!("offset '{raw}' is not an integer"))
            })?,
            None => DEFAULT_OFFSET,
        };

        let limit = match params.get("limit") {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::ClientInput(format!("limit '{raw}' is not an integer"))
            })?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self { offset, limit })
    }
}

/// Which way a feed's sort key orders its documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A feed's fixed ordering: field name plus direction.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn descending(key: &'static str) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// The `sort` document MongoDB expects.
    pub fn to_document(&self) -> Document {
        let direction = match self.direction {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        };

        let mut sort = Document::new();
        sort.insert(self.key, direction);
        sort
    }
}

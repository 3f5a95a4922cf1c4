use std::fmt;

use async_trait::async_trait;

use super::types::{DetailRecord, ListPage};

/// Errors that can occur while fetching catalog data.
/// The UI collapses all of these into a single failure flag; the variants
/// exist so the log says what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Status { status: u16, url: String },
    /// Body was not the JSON shape we expected.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, url } => write!(f, "HTTP {status} from {url}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Read-only access to the creature catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// `GET /pokemon?limit=<limit>&offset=<offset>`
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<ListPage, FetchError>;

    /// Fetches a full record through the URL carried by a `SummaryEntry`.
    async fn fetch_detail_at(&self, url: &str) -> Result<DetailRecord, FetchError>;

    /// `GET /pokemon/<id>`
    async fn fetch_detail(&self, id: &str) -> Result<DetailRecord, FetchError>;
}

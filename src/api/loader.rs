//! Fetch sequences for the two screens.
//!
//! A list page is a two-step load: the summary page first, then every
//! entry's full record concurrently. The records are joined all-or-nothing:
//! the first failing fetch fails the whole page and nothing partial is
//! returned.

use futures::future::try_join_all;
use log::{debug, info};

use super::client::{CatalogSource, FetchError};
use super::types::DetailRecord;
use crate::core::pager;

/// Everything the list screen needs from one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    /// Total entries across all pages, as reported by the collection endpoint.
    pub count: u32,
    /// Full records for this page, in collection order.
    pub entries: Vec<DetailRecord>,
}

/// Loads page `page` (1-based): summary fetch, then a fan-out of detail fetches.
pub async fn load_page(source: &dyn CatalogSource, page: u32) -> Result<LoadedPage, FetchError> {
    let window = pager::window_for(page);
    info!(
        "Loading page {} from {} (offset={}, limit={})",
        page,
        source.name(),
        window.offset,
        window.limit
    );

    let listing = source.fetch_page(window.offset, window.limit).await?;
    debug!(
        "Page {} listed {} of {} entries",
        page,
        listing.results.len(),
        listing.count
    );

    let entries = try_join_all(
        listing
            .results
            .iter()
            .map(|entry| source.fetch_detail_at(&entry.url)),
    )
    .await?;

    Ok(LoadedPage {
        count: listing.count,
        entries,
    })
}

/// Loads a single record by route identifier.
pub async fn load_detail(source: &dyn CatalogSource, id: &str) -> Result<DetailRecord, FetchError> {
    info!("Loading detail {} from {}", id, source.name());
    source.fetch_detail(id).await
}

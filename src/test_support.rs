//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{
    AbilitySlot, Artwork, CatalogSource, DetailRecord, FetchError, ListPage, MoveSlot, NamedRef,
    OtherSprites, Sprites, StatSlot, SummaryEntry, TypeSlot,
};

const NAMES: [&str; 9] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
];

pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

fn named(name: impl Into<String>) -> NamedRef {
    NamedRef { name: name.into() }
}

pub fn name_for(id: u32) -> String {
    match id {
        1..=9 => NAMES[(id - 1) as usize].to_string(),
        25 => "pikachu".to_string(),
        _ => format!("creature-{id}"),
    }
}

/// A deterministic record: two types, two abilities, six stats, twelve moves.
pub fn record(id: u32) -> DetailRecord {
    DetailRecord {
        id,
        name: name_for(id),
        sprites: Sprites {
            front_default: Some(format!("https://img.test/{id}.png")),
            other: OtherSprites {
                official_artwork: Artwork {
                    front_default: Some(format!("https://img.test/art/{id}.png")),
                },
            },
        },
        abilities: ["static", "lightning-rod"]
            .iter()
            .map(|n| AbilitySlot { ability: named(*n) })
            .collect(),
        types: ["electric", "fairy"]
            .iter()
            .map(|n| TypeSlot { type_ref: named(*n) })
            .collect(),
        stats: STAT_NAMES
            .iter()
            .enumerate()
            .map(|(i, n)| StatSlot {
                base_stat: 10 * (i as u32 + 1),
                stat: named(*n),
            })
            .collect(),
        moves: (1..=12)
            .map(|i| MoveSlot { move_ref: named(format!("move-{i}")) })
            .collect(),
    }
}

/// In-memory catalog of `count` records with ids `1..=count`.
/// Records every request and can be told to fail.
pub struct StubSource {
    count: u32,
    failing_ids: Vec<u32>,
    fail_listing: bool,
    /// When set, every detail fetch waits here until the whole page has started
    detail_barrier: Option<tokio::sync::Barrier>,
    page_requests: Mutex<Vec<(u32, u32)>>,
    detail_url_requests: Mutex<Vec<String>>,
    detail_id_requests: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn with_catalog(count: u32) -> Self {
        Self {
            count,
            failing_ids: Vec::new(),
            fail_listing: false,
            detail_barrier: None,
            page_requests: Mutex::new(Vec::new()),
            detail_url_requests: Mutex::new(Vec::new()),
            detail_id_requests: Mutex::new(Vec::new()),
        }
    }

    /// Detail fetches for `id` answer HTTP 500.
    pub fn failing_id(mut self, id: u32) -> Self {
        self.failing_ids.push(id);
        self
    }

    /// The collection endpoint fails with a network error.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Detail fetches only complete once `in_flight` of them are running at
    /// the same time. A loader that fetches one at a time never gets there.
    pub fn requiring_concurrent_details(mut self, in_flight: usize) -> Self {
        self.detail_barrier = Some(tokio::sync::Barrier::new(in_flight));
        self
    }

    pub fn page_requests(&self) -> Vec<(u32, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn detail_url_requests(&self) -> Vec<String> {
        self.detail_url_requests.lock().unwrap().clone()
    }

    pub fn detail_id_requests(&self) -> Vec<String> {
        self.detail_id_requests.lock().unwrap().clone()
    }

    fn lookup(&self, id: &str) -> Result<DetailRecord, FetchError> {
        let parsed = id.parse::<u32>().ok().filter(|n| (1..=self.count).contains(n));
        match parsed {
            None => Err(FetchError::Status {
                status: 404,
                url: format!("stub://pokemon/{id}/"),
            }),
            Some(n) if self.failing_ids.contains(&n) => Err(FetchError::Status {
                status: 500,
                url: format!("stub://pokemon/{n}/"),
            }),
            Some(n) => Ok(record(n)),
        }
    }
}

#[async_trait]
impl CatalogSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<ListPage, FetchError> {
        self.page_requests.lock().unwrap().push((offset, limit));
        if self.fail_listing {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        let first = offset + 1;
        let last = (offset + limit).min(self.count);
        Ok(ListPage {
            count: self.count,
            results: (first..=last)
                .map(|id| SummaryEntry {
                    name: name_for(id),
                    url: format!("stub://pokemon/{id}/"),
                })
                .collect(),
        })
    }

    async fn fetch_detail_at(&self, url: &str) -> Result<DetailRecord, FetchError> {
        self.detail_url_requests.lock().unwrap().push(url.to_string());
        if let Some(barrier) = &self.detail_barrier {
            barrier.wait().await;
        }
        let id = url.trim_start_matches("stub://pokemon/").trim_end_matches('/');
        self.lookup(id)
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailRecord, FetchError> {
        self.detail_id_requests.lock().unwrap().push(id.to_string());
        self.lookup(id)
    }
}

/// Flattens a rendered buffer into one string, row after row.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Text of each buffer row, trailing spaces trimmed.
pub fn buffer_rows(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>().trim_end().to_string())
        .collect()
}

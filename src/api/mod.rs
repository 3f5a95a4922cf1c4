pub mod client;
pub mod loader;
pub mod pokeapi;
pub mod types;

pub use client::{CatalogSource, FetchError};
pub use loader::{LoadedPage, load_detail, load_page};
pub use pokeapi::{DEFAULT_BASE_URL, PokeApiClient};
pub use types::{
    AbilitySlot, Artwork, DetailRecord, ListPage, MoveSlot, NamedRef, OtherSprites, Sprites,
    StatSlot, SummaryEntry, TypeSlot,
};

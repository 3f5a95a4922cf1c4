//! Wire types for the PokeAPI `/pokemon` resources.
//!
//! Only the fields the viewer displays are modelled; serde ignores the rest
//! of the (very large) upstream payload.

use serde::Deserialize;

/// A list row: a name plus the URL of the full record.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub name: String,
    pub url: String,
}

/// One page of the collection endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListPage {
    /// Total number of entries across all pages.
    pub count: u32,
    pub results: Vec<SummaryEntry>,
}

/// `{ "name": ... }` wrapper used by every nested resource reference.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
    pub ability: NamedRef,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedRef,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_ref: NamedRef,
}

/// Full record for one creature. Used both for list cells and the detail screen.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl DetailRecord {
    /// Route identifier for this record (`/pokemon/<id>`).
    pub fn route_id(&self) -> String {
        self.id.to_string()
    }

    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites.other.official_artwork.front_default.as_deref()
    }
}

//! # Detail View Model
//!
//! Derived, display-ready data for the detail screen. Everything the
//! renderer shows about a record comes from here, so the rules (casing,
//! joining, the move cap) are testable without a terminal.

use crate::api::DetailRecord;

/// Moves beyond this many are never shown.
pub const MOVES_SHOWN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub artwork_url: Option<String>,
    pub sprite_url: Option<String>,
    pub types: String,
    pub abilities: String,
    /// (stat name, base value) in source order.
    pub stats: Vec<(String, u32)>,
    /// First [`MOVES_SHOWN`] move names in source order.
    pub moves: Vec<String>,
}

impl From<&DetailRecord> for DetailView {
    fn from(record: &DetailRecord) -> Self {
        Self {
            title: display_case(&record.name),
            artwork_url: record.artwork_url().map(str::to_string),
            sprite_url: record.sprites.front_default.clone(),
            types: join_names(record.types.iter().map(|t| t.type_ref.name.as_str())),
            abilities: join_names(record.abilities.iter().map(|a| a.ability.name.as_str())),
            stats: record
                .stats
                .iter()
                .map(|s| (s.stat.name.clone(), s.base_stat))
                .collect(),
            moves: record
                .moves
                .iter()
                .take(MOVES_SHOWN)
                .map(|m| m.move_ref.name.clone())
                .collect(),
        }
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Upper-cases the first letter of every whitespace-separated word.
/// Hyphenated names stay one word: `mr-mime` → `Mr-mime`.
pub fn display_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_display_case() {
        assert_eq!(display_case("pikachu"), "Pikachu");
        assert_eq!(display_case("mr-mime"), "Mr-mime");
        assert_eq!(display_case("tapu koko"), "Tapu Koko");
        assert_eq!(display_case(""), "");
    }

    #[test]
    fn test_view_for_record_25() {
        let view = DetailView::from(&record(25));

        assert_eq!(view.title, "Pikachu");
        assert_eq!(view.artwork_url.as_deref(), Some("https://img.test/art/25.png"));
        assert_eq!(view.sprite_url.as_deref(), Some("https://img.test/25.png"));
        assert_eq!(view.types, "electric, fairy");
        assert_eq!(view.abilities, "static, lightning-rod");
        assert_eq!(
            view.stats,
            vec![
                ("hp".to_string(), 10),
                ("attack".to_string(), 20),
                ("defense".to_string(), 30),
                ("special-attack".to_string(), 40),
                ("special-defense".to_string(), 50),
                ("speed".to_string(), 60),
            ]
        );
    }

    #[test]
    fn test_only_first_ten_moves_in_source_order() {
        let view = DetailView::from(&record(25));

        assert_eq!(view.moves.len(), 10);
        assert_eq!(view.moves.first().map(String::as_str), Some("move-1"));
        assert_eq!(view.moves.last().map(String::as_str), Some("move-10"));
        assert!(!view.moves.contains(&"move-11".to_string()));
    }

    #[test]
    fn test_fewer_than_ten_moves_all_shown() {
        let mut rec = record(1);
        rec.moves.truncate(3);
        let view = DetailView::from(&rec);
        assert_eq!(view.moves, vec!["move-1", "move-2", "move-3"]);
    }

    #[test]
    fn test_empty_lists_join_to_empty_string() {
        let mut rec = record(1);
        rec.types.clear();
        rec.abilities.clear();
        let view = DetailView::from(&rec);
        assert_eq!(view.types, "");
        assert_eq!(view.abilities, "");
    }
}

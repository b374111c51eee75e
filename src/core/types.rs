// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The answer side of a card together with its error counter.
/// This is the value stored under each term in a card file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStats {
    pub definition: String,
    /// Number of wrong answers since the last reset.
    #[serde(default)]
    pub mistakes: u64,
}

impl CardStats {
    pub fn new(definition: impl Into<String>) -> Self {
        Self { definition: definition.into(), mistakes: 0 }
    }
}

/// A single flashcard. The term is the unique key inside a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub term: String,
    pub stats: CardStats,
}

impl Card {
    pub fn definition(&self) -> &str {
        &self.stats.definition
    }

    pub fn mistakes(&self) -> u64 {
        self.stats.mistakes
    }
}

/// Terms sharing the highest mistake count, in deck order.
/// `terms` is empty (and `mistakes` is 0) when nobody made a mistake yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardestCards {
    pub terms: Vec<String>,
    pub mistakes: u64,
}

impl HardestCards {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// An ordered mapping of term -> stats, the unit of import and export.
///
/// Serialises as a plain JSON object whose key order follows the entries.
/// When a JSON object repeats a key the last value wins and keeps the
/// position of the first occurrence, matching how the deck merges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    entries: Vec<(String, CardStats)>,
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&CardStats> {
        self.entries.iter().find(|(t, _)| t == term).map(|(_, stats)| stats)
    }

    /// Inserts or replaces the stats for `term`.
    pub fn insert(&mut self, term: impl Into<String>, stats: CardStats) {
        let term = term.into();
        match self.entries.iter_mut().find(|(t, _)| *t == term) {
            Some((_, existing)) => *existing = stats,
            None => self.entries.push((term, stats)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardStats)> {
        self.entries.iter().map(|(term, stats)| (term.as_str(), stats))
    }
}

impl IntoIterator for CardSet {
    type Item = (String, CardStats);
    type IntoIter = std::vec::IntoIter<(String, CardStats)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, CardStats)> for CardSet {
    fn from_iter<T: IntoIterator<Item = (String, CardStats)>>(iter: T) -> Self {
        let mut set = CardSet::new();
        for (term, stats) in iter {
            set.insert(term, stats);
        }
        set
    }
}

impl Serialize for CardSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (term, stats) in &self.entries {
            map.serialize_entry(term, stats)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CardSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CardSetVisitor;

        impl<'de> serde::de::Visitor<'de> for CardSetVisitor {
            type Value = CardSet;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an object mapping terms to {definition, mistakes}")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(self, mut access: A) -> Result<CardSet, A::Error> {
                let mut set = CardSet::new();
                while let Some((term, stats)) = access.next_entry::<String, CardStats>()? {
                    set.insert(term, stats);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(CardSetVisitor)
    }
}

// File: src/core/deck.rs
use crate::core::types::{Card, CardSet, CardStats, HardestCards};

/// The in-memory set of flashcards for one session.
///
/// Cards are kept in insertion order. Terms are unique because every write
/// goes through a lookup first; definitions are NOT checked here, the
/// interactive `add` handler does that so imports can still overwrite.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index` in insertion order.
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.term == term)
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.term == term)
    }

    /// Adds a fresh card with zero mistakes. An existing term is overwritten.
    pub fn add(&mut self, term: &str, definition: &str) {
        self.upsert(term.to_string(), CardStats::new(definition));
    }

    fn upsert(&mut self, term: String, stats: CardStats) {
        match self.position(&term) {
            Some(idx) => self.cards[idx].stats = stats,
            None => self.cards.push(Card { term, stats }),
        }
    }

    /// Returns whether the term was present.
    pub fn remove(&mut self, term: &str) -> bool {
        match self.position(term) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn term_exists(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    /// First term (in deck order) whose definition equals `definition`.
    pub fn definition_owner(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.definition() == definition)
            .map(|card| card.term.as_str())
    }

    /// Bumps the mistake counter of `term`. Returns false if the term is unknown.
    pub fn record_mistake(&mut self, term: &str) -> bool {
        match self.position(term) {
            Some(idx) => {
                self.cards[idx].stats.mistakes += 1;
                true
            }
            None => false,
        }
    }

    pub fn reset_stats(&mut self) {
        for card in self.cards.iter_mut() {
            card.stats.mistakes = 0;
        }
    }

    pub fn hardest_cards(&self) -> HardestCards {
        let max_mistakes = self.cards.iter().map(Card::mistakes).max().unwrap_or(0);
        if max_mistakes == 0 {
            return HardestCards::default();
        }

        let terms = self
            .cards
            .iter()
            .filter(|card| card.mistakes() == max_mistakes)
            .map(|card| card.term.clone())
            .collect();
        HardestCards { terms, mistakes: max_mistakes }
    }

    /// Merges `entries` into the deck, last write wins.
    /// Returns the number of entries in the imported set, not the net-new count.
    pub fn import_merge(&mut self, entries: CardSet) -> usize {
        let count = entries.len();
        for (term, stats) in entries {
            self.upsert(term, stats);
        }
        count
    }

    pub fn export_snapshot(&self) -> CardSet {
        self.cards
            .iter()
            .map(|card| (card.term.clone(), card.stats.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(pairs: &[(&str, &str)]) -> Deck {
        let mut deck = Deck::new();
        for (term, definition) in pairs {
            deck.add(term, definition);
        }
        deck
    }

    #[test]
    fn test_add_and_lookup() {
        let deck = deck_of(&[("France", "Paris"), ("Italy", "Rome")]);

        assert_eq!(deck.len(), 2);
        assert!(deck.term_exists("France"));
        assert!(!deck.term_exists("Spain"));
        assert_eq!(deck.get("Italy").map(Card::definition), Some("Rome"));
        assert_eq!(deck.get("Italy").map(Card::mistakes), Some(0));
    }

    #[test]
    fn test_add_existing_term_overwrites() {
        let mut deck = deck_of(&[("France", "Paris")]);
        deck.record_mistake("France");
        deck.add("France", "Lyon");

        assert_eq!(deck.len(), 1);
        let card = deck.get("France").unwrap();
        assert_eq!(card.definition(), "Lyon");
        assert_eq!(card.mistakes(), 0);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut deck = deck_of(&[("France", "Paris")]);

        assert!(deck.remove("France"));
        assert!(!deck.remove("France"));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_definition_owner_returns_first_match() {
        let mut deck = deck_of(&[("a", "x"), ("b", "y")]);
        // Imports are allowed to introduce duplicate definitions.
        let mut dup = CardSet::new();
        dup.insert("c", CardStats::new("x"));
        deck.import_merge(dup);

        assert_eq!(deck.definition_owner("x"), Some("a"));
        assert_eq!(deck.definition_owner("y"), Some("b"));
        assert_eq!(deck.definition_owner("z"), None);
    }

    #[test]
    fn test_record_mistake_increments_by_one() {
        let mut deck = deck_of(&[("France", "Paris")]);

        assert!(deck.record_mistake("France"));
        assert!(deck.record_mistake("France"));
        assert!(!deck.record_mistake("Spain"));
        assert_eq!(deck.get("France").unwrap().mistakes(), 2);
    }

    #[test]
    fn test_reset_stats_keeps_cards_and_is_idempotent() {
        let mut deck = deck_of(&[("France", "Paris"), ("Italy", "Rome")]);
        deck.record_mistake("France");
        deck.record_mistake("Italy");

        deck.reset_stats();
        let once = deck.export_snapshot();
        deck.reset_stats();

        assert_eq!(deck.export_snapshot(), once);
        assert!(deck.cards().iter().all(|card| card.mistakes() == 0));
        assert_eq!(deck.get("Italy").unwrap().definition(), "Rome");
    }

    #[test]
    fn test_hardest_cards_empty_deck() {
        assert!(Deck::new().hardest_cards().is_empty());
    }

    #[test]
    fn test_hardest_cards_no_mistakes() {
        let deck = deck_of(&[("France", "Paris")]);
        assert_eq!(deck.hardest_cards(), HardestCards::default());
    }

    #[test]
    fn test_hardest_cards_ties_in_deck_order() {
        let mut deck = deck_of(&[("a", "1"), ("b", "2"), ("c", "3")]);
        deck.record_mistake("c");
        deck.record_mistake("c");
        deck.record_mistake("a");
        deck.record_mistake("a");
        deck.record_mistake("b");

        let hardest = deck.hardest_cards();
        assert_eq!(hardest.terms, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(hardest.mistakes, 2);
    }

    #[test]
    fn test_import_merge_overwrites_and_counts_all_entries() {
        let mut deck = deck_of(&[("France", "Paris"), ("Italy", "Rome")]);
        let mut incoming = CardSet::new();
        incoming.insert("Italy", CardStats { definition: "Roma".into(), mistakes: 4 });
        incoming.insert("Spain", CardStats::new("Madrid"));

        assert_eq!(deck.import_merge(incoming), 2);

        let terms: Vec<&str> = deck.cards().iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["France", "Italy", "Spain"]);
        assert_eq!(deck.get("Italy").unwrap().definition(), "Roma");
        assert_eq!(deck.get("Italy").unwrap().mistakes(), 4);
    }

    #[test]
    fn test_export_snapshot_into_fresh_deck() {
        let mut deck = deck_of(&[("France", "Paris"), ("Italy", "Rome")]);
        deck.record_mistake("Italy");

        let mut fresh = Deck::new();
        fresh.import_merge(deck.export_snapshot());

        assert_eq!(fresh.cards(), deck.cards());
    }
}

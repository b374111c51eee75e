// File: src/core/picker.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Chooses which card to show next during an `ask` round.
pub trait CardPicker {
    /// Called once at the start of every `ask` command.
    fn begin_round(&mut self) {}

    /// Index of the next card to ask. `deck_len` is always > 0.
    fn pick(&mut self, deck_len: usize) -> usize;
}

/// Uniform pick with replacement. Every question is independent.
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CardPicker for RandomPicker {
    fn pick(&mut self, deck_len: usize) -> usize {
        self.rng.random_range(0..deck_len)
    }
}

/// Walks the deck in insertion order, wrapping around.
/// Every round starts again from the first card.
#[derive(Debug, Default)]
pub struct CyclePicker {
    next: usize,
}

impl CyclePicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CardPicker for CyclePicker {
    fn begin_round(&mut self) {
        self.next = 0;
    }

    fn pick(&mut self, deck_len: usize) -> usize {
        // The deck may have shrunk since the last round.
        let idx = self.next % deck_len;
        self.next = idx + 1;
        idx
    }
}

/// Which picker a session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickOrder {
    #[default]
    Random,
    Sequential,
}

impl PickOrder {
    pub fn build(self, seed: Option<u64>) -> Box<dyn CardPicker> {
        match (self, seed) {
            (PickOrder::Random, Some(seed)) => Box::new(RandomPicker::seeded(seed)),
            (PickOrder::Random, None) => Box::new(RandomPicker::new()),
            (PickOrder::Sequential, _) => Box::new(CyclePicker::new()),
        }
    }
}

impl FromStr for PickOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(PickOrder::Random),
            "sequential" | "cycle" => Ok(PickOrder::Sequential),
            other => Err(format!("unknown pick order '{}', expected 'random' or 'sequential'", other)),
        }
    }
}

impl fmt::Display for PickOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickOrder::Random => f.write_str("random"),
            PickOrder::Sequential => f.write_str("sequential"),
        }
    }
}

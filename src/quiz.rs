// File: src/quiz.rs
use crate::core::deck::Deck;
use std::fmt;

/// Outcome of a single answer during `ask`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong { expected: String },
    /// The guess is the definition of a different card.
    WrongButKnown { expected: String, owner: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => f.write_str("Correct!"),
            Verdict::Wrong { expected } => write!(f, "Wrong. The right answer is \"{}\".", expected),
            Verdict::WrongButKnown { expected, owner } => write!(
                f,
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, owner
            ),
        }
    }
}

pub fn question(term: &str) -> String {
    format!("Print the definition of \"{}\":", term)
}

/// Compares `guess` with the definition of `term` and records a mistake on
/// mismatch. The comparison is exact: no trimming, case-sensitive.
/// Returns `None` if `term` is not in the deck.
pub fn grade(deck: &mut Deck, term: &str, guess: &str) -> Option<Verdict> {
    let expected = deck.get(term)?.definition().to_string();
    if guess == expected {
        return Some(Verdict::Correct);
    }

    deck.record_mistake(term);
    let verdict = match deck.definition_owner(guess) {
        Some(owner) => Verdict::WrongButKnown { expected, owner: owner.to_string() },
        None => Verdict::Wrong { expected },
    };
    Some(verdict)
}

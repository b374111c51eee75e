// src/lib.rs

pub mod core;
pub mod errors;
pub mod io;
pub mod persistence;
pub mod quiz;
pub mod session;
pub mod transcript;

pub use crate::core::deck::Deck;
pub use crate::errors::{FlashcardError, Result};
pub use crate::session::{CommandLoop, SessionConfig, SessionEnd};

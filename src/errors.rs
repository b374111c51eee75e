//! Error types for the flashcard library.
//!
//! Only console failures escape the command loop; file problems are turned
//! into user-facing messages by the handlers that hit them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed card file: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

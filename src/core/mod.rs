// src/core/mod.rs

pub mod deck;
pub mod picker;
pub mod types;

//! Core domain types
//!
//! Fundamental types for the puzzle domain: words, per-position tile
//! outcomes, and clue derivation. Everything here is pure and owns no state.

mod clue;
mod word;

pub use clue::{Clue, LengthMismatch, ParseClueError, Tile, TileStatus};
pub use word::{Word, WordError};

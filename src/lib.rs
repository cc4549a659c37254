//! Crossword grid filling as constraint satisfaction.
//!
//! A [`Grid`] is scanned into a [`Structure`] (slots plus their overlap
//! relation), candidate words are narrowed by node and arc consistency, and
//! a backtracking search with maintaining arc consistency produces a
//! complete [`Assignment`] or reports that none exists.

pub mod consistency;
pub mod domains;
pub mod grid;
pub mod render;
pub mod solve;
pub mod structure;

pub use grid::{Direction, Grid, StructureError};
pub use render::render;
pub use solve::{solve, Assignment, Solver};
pub use structure::{Slot, Structure};

/// Load a vocabulary from word-list text: one candidate per line, blank
/// lines skipped, everything uppercased.
pub fn load_words(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

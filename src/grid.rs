use std::fmt;

use thiserror::Error;

/// Orientation of a slot within the grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Across,
    Down,
}

/// Errors raised while building a [`Grid`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Grid geometry: which cells are open and which are blocked.
///
/// A grid knows nothing about letters or words; it is the fixed input that
/// [`Structure::build`](crate::structure::Structure::build) scans for slots.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

/// Cell marker for a blocked square in grid text.
pub const BLOCKED: char = '*';

impl Grid {
    /// Parse a grid from newline-separated rows. `*` marks a blocked cell,
    /// any other character an open one. Leading and trailing blank lines are
    /// ignored; every remaining row must have the same width.
    pub fn parse(input: &str) -> Result<Grid, StructureError> {
        let rows: Vec<&str> = input
            .lines()
            .skip_while(|line| line.is_empty())
            .collect();
        let rows = {
            let trailing = rows.iter().rev().take_while(|line| line.is_empty()).count();
            &rows[..rows.len() - trailing]
        };

        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (index, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(StructureError::RaggedRows {
                    row: index,
                    found,
                    expected: width,
                });
            }
            cells.extend(row.chars().map(|c| c != BLOCKED));
        }

        Ok(Grid {
            cells,
            width,
            height: rows.len(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_open(row, col) { ' ' } else { BLOCKED };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

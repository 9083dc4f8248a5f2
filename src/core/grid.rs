//! Grid module - the static rectangular map
//!
//! A grid is an immutable template of cell kinds supplied by an external
//! map loader. Uses a flat row-major array for cache locality.
//! Coordinates: (row, col) where row ranges top to bottom.

use anyhow::{bail, Result};

use crate::types::{CellKind, Position};

/// A rectangular grid of cell kinds, flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from character rows.
    ///
    /// Rejects ragged input: every row must match the length of the first.
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut cells = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                bail!(
                    "ragged grid: row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                );
            }
            cells.extend(row.iter().map(|&ch| CellKind::from_char(ch)));
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Build a grid from newline-separated text, one character per cell.
    pub fn from_lines(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        Self::from_rows(&rows)
    }

    /// Calculate flat index from (row, col) coordinates.
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col). Returns `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<CellKind> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at (row, col). Returns `false` if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, kind: CellKind) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Whether a position falls within grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Replace every cell of kind `from` with `to`.
    pub fn replace_all(&mut self, from: CellKind, to: CellKind) {
        for cell in &mut self.cells {
            if *cell == from {
                *cell = to;
            }
        }
    }

    /// Reference to the flat cell array.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Render back to character rows, one `String` per grid row.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                let start = r * self.cols;
                self.cells[start..start + self.cols]
                    .iter()
                    .map(|c| c.as_char())
                    .collect()
            })
            .collect()
    }
}

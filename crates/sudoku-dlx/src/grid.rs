//! Board representation shared by the solver, generator, and parser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square Sudoku board of side `size`, where `size` must be a perfect
/// square (`size = box_size²`, classically 9 with 3×3 boxes).
///
/// Cells are stored row-major; 0 means blank, `1..=size` is a placed digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    box_size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid of the given side length.
    ///
    /// Panics if `size` is not a perfect square with a box side of at
    /// least 2, or exceeds the `u8` digit range. A bad size is a caller
    /// contract violation, not a recoverable condition.
    pub fn new(size: usize) -> Self {
        let box_size = (size as f64).sqrt() as usize;
        assert!(
            box_size >= 2 && box_size * box_size == size,
            "grid size {} is not a perfect square >= 4",
            size
        );
        assert!(size <= u8::MAX as usize, "grid size {} too large", size);
        Self {
            size,
            box_size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from row-major rows. Panics on ragged input or
    /// out-of-range values (contract violation).
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let mut grid = Self::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), grid.size, "row {} has wrong length", r);
            for (c, &v) in row.iter().enumerate() {
                grid.set(r, c, v);
            }
        }
        grid
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of one box (`sqrt(size)`).
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Index of the box containing `(row, col)`.
    pub fn box_index(&self, row: usize, col: usize) -> usize {
        (row / self.box_size) * self.box_size + col / self.box_size
    }

    /// Value at `(row, col)`; 0 means blank.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    /// Set `(row, col)` to `value` (0 clears the cell).
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(
            (value as usize) <= self.size,
            "value {} out of range for size {}",
            value,
            self.size
        );
        self.cells[row * self.size + col] = value;
    }

    /// Number of filled cells (clues).
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Number of blank cells.
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.clue_count()
    }

    /// Whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether the grid is a complete, valid solution: every cell filled
    /// and every row, column, and box containing each digit exactly once.
    pub fn is_valid_solution(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        let n = self.size;
        let mut rows = vec![0u64; n];
        let mut cols = vec![0u64; n];
        let mut boxes = vec![0u64; n];
        for r in 0..n {
            for c in 0..n {
                let bit = 1u64 << (self.get(r, c) - 1);
                let b = self.box_index(r, c);
                if rows[r] & bit != 0 || cols[c] & bit != 0 || boxes[b] & bit != 0 {
                    return false;
                }
                rows[r] |= bit;
                cols[c] |= bit;
                boxes[b] |= bit;
            }
        }
        true
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let v = self.get(r, c);
                if self.size <= 9 {
                    match v {
                        0 => write!(f, ".")?,
                        _ => write!(f, "{}", v)?,
                    }
                } else {
                    if c > 0 {
                        write!(f, " ")?;
                    }
                    match v {
                        0 => write!(f, ".")?,
                        _ => write!(f, "{}", v)?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Sudoku-to-exact-cover encoding and solution decoding.
//!
//! A board of side `N = k²` maps to `4N²` constraint columns in four
//! families: cell occupancy, row-digit, column-digit, and box-digit
//! uniqueness. Each candidate placement (row, col, digit) becomes one
//! sparse-matrix row activating exactly one column per family.

use crate::grid::Grid;
use crate::rng::SolverRng;
use crate::solver::dlx::LinkedGrid;

/// Payload identifying the candidate placement a matrix row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

/// The encoded constraint matrix: per matrix row, its four activated
/// columns, in parallel with the placement payloads.
pub(crate) struct ConstraintMatrix {
    columns: usize,
    rows: Vec<[usize; 4]>,
    placements: Vec<Placement>,
}

impl ConstraintMatrix {
    /// Encode `grid`. A filled cell contributes one matrix row; a blank
    /// cell contributes one row per candidate digit. When `rng` is given,
    /// each blank cell's candidate order is shuffled, which makes a
    /// first-solution search produce a random full grid.
    pub(crate) fn encode(grid: &Grid, mut rng: Option<&mut SolverRng>) -> Self {
        let n = grid.size();
        let mut matrix = Self {
            columns: 4 * n * n,
            rows: Vec::new(),
            placements: Vec::new(),
        };

        let mut candidates: Vec<u8> = Vec::with_capacity(n);
        for row in 0..n {
            for col in 0..n {
                candidates.clear();
                match grid.get(row, col) {
                    0 => {
                        candidates.extend(0..n as u8);
                        if let Some(rng) = rng.as_deref_mut() {
                            rng.shuffle(&mut candidates);
                        }
                    }
                    v => candidates.push(v - 1),
                }
                for &digit in &candidates {
                    matrix.push_placement(grid, row, col, digit);
                }
            }
        }
        matrix
    }

    fn push_placement(&mut self, grid: &Grid, row: usize, col: usize, digit: u8) {
        let n = grid.size();
        let d = digit as usize;
        self.rows.push([
            row * n + col,
            n * n + row * n + d,
            2 * n * n + col * n + d,
            3 * n * n + grid.box_index(row, col) * n + d,
        ]);
        self.placements.push(Placement {
            row,
            col,
            value: digit + 1,
        });
    }

    /// Build the linked structure the search mutates. The four column
    /// indices per row are strictly increasing by construction, satisfying
    /// the no-duplicate-column contract.
    pub(crate) fn to_linked_grid(&self) -> LinkedGrid {
        let mut linked = LinkedGrid::new(self.columns);
        for (index, cols) in self.rows.iter().enumerate() {
            linked.add_row(index, cols);
        }
        linked
    }

    /// Decode a chosen row set back into a grid. An exact cover places
    /// exactly one value in every cell, so no re-validation happens here.
    pub(crate) fn decode(&self, size: usize, rows: &[usize]) -> Grid {
        let mut grid = Grid::new(size);
        for &index in rows {
            let p = self.placements[index];
            grid.set(p.row, p.col, p.value);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count_and_row_counts() {
        let mut grid = Grid::new(9);
        grid.set(0, 0, 5);
        let matrix = ConstraintMatrix::encode(&grid, None);
        assert_eq!(matrix.columns, 324);
        // One row for the filled cell, nine per blank cell.
        assert_eq!(matrix.rows.len(), 1 + 80 * 9);
    }

    #[test]
    fn test_column_families() {
        let mut grid = Grid::new(9);
        grid.set(4, 7, 3);
        let matrix = ConstraintMatrix::encode(&grid, None);
        // The filled cell's row is emitted first for cell (4,7).
        let cols = matrix
            .rows
            .iter()
            .zip(&matrix.placements)
            .find(|(_, p)| p.row == 4 && p.col == 7)
            .map(|(c, _)| *c)
            .unwrap();
        // digit index 2, box (1,2) -> box 5
        assert_eq!(cols, [4 * 9 + 7, 81 + 4 * 9 + 2, 162 + 7 * 9 + 2, 243 + 5 * 9 + 2]);
    }

    #[test]
    fn test_decode_round_trip_full_grid() {
        let grid = Grid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ]);
        let matrix = ConstraintMatrix::encode(&grid, None);
        // Every cell filled: exactly one matrix row per cell, and choosing
        // all of them decodes back to the same grid.
        let all_rows: Vec<usize> = (0..matrix.rows.len()).collect();
        assert_eq!(all_rows.len(), 16);
        assert_eq!(matrix.decode(4, &all_rows), grid);
    }

    #[test]
    fn test_shuffled_encode_same_shape() {
        let grid = Grid::new(4);
        let plain = ConstraintMatrix::encode(&grid, None);
        let mut rng = SolverRng::with_seed(9);
        let shuffled = ConstraintMatrix::encode(&grid, Some(&mut rng));
        assert_eq!(plain.rows.len(), shuffled.rows.len());
        // Same multiset of placements per cell, order possibly different.
        let mut a: Vec<_> = plain.placements.clone();
        let mut b: Vec<_> = shuffled.placements.clone();
        a.sort_by_key(|p| (p.row, p.col, p.value));
        b.sort_by_key(|p| (p.row, p.col, p.value));
        assert_eq!(a, b);
    }
}

//! Exact-cover Sudoku solver.
//!
//! Pipeline: grid → constraint matrix ([`encode`]) → linked node structure
//! → backtracking search over cover/uncover ([`dlx`]) → chosen rows decoded
//! back into a grid. The linked structure is built fresh per call and
//! discarded afterwards; the solver itself carries no state.

mod dlx;
mod encode;

use crate::grid::Grid;
use crate::rng::SolverRng;
use dlx::{search, SearchMode, SearchOutcome};
use encode::ConstraintMatrix;
use serde::{Deserialize, Serialize};

/// Result of an exhaustive solution count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionCount {
    /// Total number of complete solutions found.
    pub count: usize,
    /// The first solution encountered, if any.
    pub first_solution: Option<Grid>,
}

/// Stateless solver facade; all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Find one solution, or `None` if the grid is unsatisfiable.
    pub fn solve_first(&self, grid: &Grid) -> Option<Grid> {
        let (matrix, outcome) = self.run(grid, SearchMode::First, None);
        outcome
            .first
            .map(|rows| matrix.decode(grid.size(), &rows))
    }

    /// Like [`solve_first`](Self::solve_first), but each blank cell's
    /// candidate order is shuffled. On an empty grid this yields a random
    /// full grid, the generator's seed.
    pub fn solve_random_first(&self, grid: &Grid, rng: &mut SolverRng) -> Option<Grid> {
        let (matrix, outcome) = self.run(grid, SearchMode::First, Some(rng));
        outcome
            .first
            .map(|rows| matrix.decode(grid.size(), &rows))
    }

    /// Count every solution, exploring the entire search tree, and return
    /// the total plus a decoded copy of the first solution encountered.
    ///
    /// Grids with very few clues can have astronomically many solutions;
    /// use [`count_solutions_up_to`](Self::count_solutions_up_to) when the
    /// input is not trusted to be near-unique.
    pub fn count_solutions(&self, grid: &Grid) -> SolutionCount {
        self.count_impl(grid, None)
    }

    /// Count solutions, halting once `cap` have been seen.
    pub fn count_solutions_up_to(&self, grid: &Grid, cap: usize) -> SolutionCount {
        self.count_impl(grid, Some(cap))
    }

    /// Whether the grid has exactly one solution. Capped at two: seeing a
    /// second solution already settles the answer.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions_up_to(grid, 2).count == 1
    }

    /// Materialize every solution, up to `cap`.
    pub fn solve_all(&self, grid: &Grid, cap: usize) -> Vec<Grid> {
        let (matrix, outcome) = self.run(grid, SearchMode::Enumerate { cap: Some(cap) }, None);
        outcome
            .all
            .iter()
            .map(|rows| matrix.decode(grid.size(), rows))
            .collect()
    }

    fn count_impl(&self, grid: &Grid, cap: Option<usize>) -> SolutionCount {
        let (matrix, outcome) = self.run(grid, SearchMode::CountAll { cap }, None);
        SolutionCount {
            count: outcome.count,
            first_solution: outcome
                .first
                .map(|rows| matrix.decode(grid.size(), &rows)),
        }
    }

    fn run(
        &self,
        grid: &Grid,
        mode: SearchMode,
        rng: Option<&mut SolverRng>,
    ) -> (ConstraintMatrix, SearchOutcome) {
        let matrix = ConstraintMatrix::encode(grid, rng);
        let mut linked = matrix.to_linked_grid();
        let outcome = search(&mut linked, &mode);
        (matrix, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_puzzle;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    fn classic_solution() -> Grid {
        Grid::from_rows(&[
            vec![5, 3, 4, 6, 7, 8, 9, 1, 2],
            vec![6, 7, 2, 1, 9, 5, 3, 4, 8],
            vec![1, 9, 8, 3, 4, 2, 5, 6, 7],
            vec![8, 5, 9, 7, 6, 1, 4, 2, 3],
            vec![4, 2, 6, 8, 5, 3, 7, 9, 1],
            vec![7, 1, 3, 9, 2, 4, 8, 5, 6],
            vec![9, 6, 1, 5, 3, 7, 2, 8, 4],
            vec![2, 8, 7, 4, 1, 9, 6, 3, 5],
            vec![3, 4, 5, 2, 8, 6, 1, 7, 9],
        ])
    }

    #[test]
    fn test_classic_puzzle_solves() {
        let grid = parse_puzzle(CLASSIC, 9).unwrap();
        let solved = Solver::new().solve_first(&grid).unwrap();
        assert_eq!(solved.get(0, 2), 4);
        assert_eq!(solved.get(4, 4), 5);
        assert_eq!(solved, classic_solution());
        assert!(solved.is_valid_solution());
    }

    #[test]
    fn test_classic_puzzle_is_unique() {
        let grid = parse_puzzle(CLASSIC, 9).unwrap();
        let result = Solver::new().count_solutions(&grid);
        assert_eq!(result.count, 1);
        assert_eq!(result.first_solution.unwrap(), classic_solution());
    }

    #[test]
    fn test_complete_valid_grid_counts_one() {
        let grid = classic_solution();
        let result = Solver::new().count_solutions(&grid);
        assert_eq!(result.count, 1);
        assert_eq!(result.first_solution.unwrap(), grid);
    }

    #[test]
    fn test_complete_invalid_grid_counts_zero() {
        let mut grid = classic_solution();
        // Swap two cells in the same row: still complete, no longer valid.
        let (a, b) = (grid.get(0, 0), grid.get(0, 1));
        grid.set(0, 0, b);
        grid.set(0, 1, a);
        assert!(!grid.is_valid_solution());
        let result = Solver::new().count_solutions(&grid);
        assert_eq!(result.count, 0);
        assert!(result.first_solution.is_none());
    }

    #[test]
    fn test_unsatisfiable_puzzle_returns_none() {
        // Two 5s in the top row.
        let mut grid = Grid::new(9);
        grid.set(0, 0, 5);
        grid.set(0, 8, 5);
        assert!(Solver::new().solve_first(&grid).is_none());
    }

    #[test]
    fn test_empty_grid_has_a_solution() {
        let grid = Grid::new(9);
        let solved = Solver::new().solve_first(&grid).unwrap();
        assert!(solved.is_valid_solution());
    }

    #[test]
    fn test_4x4_solves() {
        let grid = parse_puzzle("1...\n..1.\n.4..\n...3", 4).unwrap();
        let solved = Solver::new().solve_first(&grid).unwrap();
        assert!(solved.is_valid_solution());
        assert_eq!(solved.get(0, 0), 1);
        assert_eq!(solved.get(3, 3), 3);
    }

    #[test]
    fn test_random_solve_is_deterministic_under_seed() {
        let grid = Grid::new(9);
        let solver = Solver::new();
        let mut rng_a = SolverRng::with_seed(1234);
        let mut rng_b = SolverRng::with_seed(1234);
        let a = solver.solve_random_first(&grid, &mut rng_a).unwrap();
        let b = solver.solve_random_first(&grid, &mut rng_b).unwrap();
        assert_eq!(a, b);
        assert!(a.is_valid_solution());
    }

    #[test]
    fn test_random_solves_differ_across_seeds() {
        let grid = Grid::new(9);
        let solver = Solver::new();
        let a = solver
            .solve_random_first(&grid, &mut SolverRng::with_seed(1))
            .unwrap();
        let b = solver
            .solve_random_first(&grid, &mut SolverRng::with_seed(2))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_count_cap() {
        // A near-empty grid has a huge number of completions; the cap
        // keeps the count call bounded.
        let mut grid = Grid::new(9);
        grid.set(0, 0, 1);
        let result = Solver::new().count_solutions_up_to(&grid, 10);
        assert_eq!(result.count, 10);
        assert!(result.first_solution.is_some());
    }

    #[test]
    fn test_solve_all_on_ambiguous_puzzle() {
        // 4x4 grid with two completions.
        let grid = parse_puzzle("12..\n34..\n....\n....", 4).unwrap();
        let solver = Solver::new();
        let solutions = solver.solve_all(&grid, 100);
        assert!(solutions.len() >= 2);
        assert!(solutions.iter().all(|s| s.is_valid_solution()));
        assert_eq!(
            solutions.len(),
            solver.count_solutions(&grid).count
        );
    }

    #[test]
    fn test_has_unique_solution() {
        let solver = Solver::new();
        assert!(solver.has_unique_solution(&parse_puzzle(CLASSIC, 9).unwrap()));
        assert!(!solver.has_unique_solution(&Grid::new(9)));
    }
}

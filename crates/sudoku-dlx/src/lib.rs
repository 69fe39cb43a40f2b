//! Exact-cover Sudoku engine built on Knuth's Dancing Links (DLX).
//!
//! The pipeline: a [`Grid`] is encoded as a sparse 0/1 constraint matrix
//! (rows are candidate placements, columns are constraints), the matrix
//! becomes a toroidal linked node structure, and a backtracking search
//! over reversible cover/uncover operations finds, counts, or enumerates
//! exact covers, which decode back into solved grids. The same engine
//! drives the [`Generator`], which fills a random grid and carves clues
//! out while a full solution count stays at exactly one.
//!
//! Boards of any side `N = k²` with `k >= 2` are supported (classically
//! 9×9, also 16×16).
//!
//! ```
//! use sudoku_dlx::{parse_puzzle, Solver};
//!
//! let puzzle = parse_puzzle(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//!     9,
//! )
//! .unwrap();
//! let solver = Solver::new();
//! let solved = solver.solve_first(&puzzle).unwrap();
//! assert_eq!(solved.get(0, 2), 4);
//! assert_eq!(solver.count_solutions(&puzzle).count, 1);
//! ```

mod generator;
mod grid;
mod parse;
mod rng;
mod solver;

pub use generator::{min_clues, Difficulty, Generator, GeneratorConfig, Symmetry};
pub use grid::Grid;
pub use parse::{parse_puzzle, ParseError};
pub use rng::SolverRng;
pub use solver::{SolutionCount, Solver};

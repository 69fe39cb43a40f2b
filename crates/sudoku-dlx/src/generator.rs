//! Puzzle generation: fill a random grid, then carve clues out while the
//! solution stays unique.

use crate::grid::Grid;
use crate::rng::SolverRng;
use crate::solver::Solver;
use serde::{Deserialize, Serialize};

/// Difficulty level, expressed as a target clue band.
///
/// Bands are defined for the 9×9 case and scaled proportionally for other
/// sizes. More clues means an easier puzzle; nothing beyond clue counting
/// goes into the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Map a numeric level 1..=5 to a difficulty.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Beginner),
            2 => Some(Self::Easy),
            3 => Some(Self::Medium),
            4 => Some(Self::Hard),
            5 => Some(Self::Expert),
            _ => None,
        }
    }

    /// Numeric level, 1..=5.
    pub fn level(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Easy => 2,
            Self::Medium => 3,
            Self::Hard => 4,
            Self::Expert => 5,
        }
    }

    /// Inclusive clue-count band for a 9×9 puzzle.
    pub fn clue_band(&self) -> (usize, usize) {
        match self {
            Self::Beginner => (36, 49),
            Self::Easy => (32, 35),
            Self::Medium => (28, 31),
            Self::Hard => (24, 27),
            Self::Expert => (17, 23),
        }
    }

    /// Clue band scaled to a board of side `size`, never below the
    /// uniqueness floor.
    pub fn scaled_band(&self, size: usize) -> (usize, usize) {
        let (lo, hi) = self.clue_band();
        let cells = size * size;
        let scale = |clues: usize| (clues * cells).div_ceil(81);
        let floor = min_clues(size);
        (scale(lo).max(floor), scale(hi).max(floor))
    }

    /// All difficulties, easiest first.
    pub fn all() -> &'static [Difficulty] {
        &[
            Self::Beginner,
            Self::Easy,
            Self::Medium,
            Self::Hard,
            Self::Expert,
        ]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}

/// Hard floor on clue count: 17 is the proven minimum for a uniquely
/// solvable 9×9 grid; other sizes scale the same fraction.
pub fn min_clues(size: usize) -> usize {
    (17 * size * size).div_ceil(81)
}

/// Cell-removal symmetry pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symmetry {
    /// Independent random cells.
    None,
    /// Mirror across the main diagonal.
    Diagonal,
    /// 180-degree rotational symmetry.
    Rotational180,
}

impl Default for Symmetry {
    fn default() -> Self {
        Self::None
    }
}

/// Configuration for puzzle generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Board side length (must be a perfect square).
    pub size: usize,
    /// Target difficulty.
    pub difficulty: Difficulty,
    /// Symmetry pattern for cell removal.
    pub symmetry: Symmetry,
    /// Removal attempt budget. Exhausting it is not an error: the result
    /// simply keeps more clues than requested.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 9,
            difficulty: Difficulty::Medium,
            symmetry: Symmetry::None,
            max_attempts: 10_000,
        }
    }
}

/// Sudoku puzzle generator.
pub struct Generator {
    config: GeneratorConfig,
    rng: SolverRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with default configuration and an OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SolverRng::new(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SolverRng::new(),
        }
    }

    /// Create a generator with a fixed seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SolverRng::with_seed(seed),
        }
    }

    /// Override the seed of an already-configured generator.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SolverRng::with_seed(seed);
    }

    /// Generate a puzzle at the given difficulty. The result always has a
    /// unique solution; its clue count lands in the difficulty band unless
    /// the attempt budget runs out first, in which case it lands above it.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        self.config.difficulty = difficulty;
        self.generate_with_config()
    }

    /// Generate a puzzle with the current configuration.
    pub fn generate_with_config(&mut self) -> Grid {
        let mut grid = self.filled_grid();
        let (lo, hi) = self.config.difficulty.scaled_band(self.config.size);
        let target = lo + self.rng.next_usize(hi - lo + 1);
        self.remove_clues(&mut grid, target);
        grid
    }

    /// Produce a fully solved random grid via a randomized first-solution
    /// search on an empty board.
    fn filled_grid(&mut self) -> Grid {
        let solver = Solver::new();
        loop {
            // An empty board always has solutions; the loop only guards
            // the type-level Option.
            let empty = Grid::new(self.config.size);
            if let Some(full) = solver.solve_random_first(&empty, &mut self.rng) {
                return full;
            }
        }
    }

    /// Carve cells out of a solved grid until `target` clues remain, the
    /// uniqueness floor is hit, or the attempt budget is spent. Every kept
    /// removal is verified by a full solution count of exactly one.
    fn remove_clues(&mut self, grid: &mut Grid, target: usize) {
        let solver = Solver::new();
        let n = self.config.size;
        let floor = min_clues(n);
        let target = target.max(floor);
        let mut clues = grid.clue_count();
        let mut attempts = 0;

        while clues > target && attempts < self.config.max_attempts {
            attempts += 1;

            let row = self.rng.next_usize(n);
            let col = self.rng.next_usize(n);
            if grid.get(row, col) == 0 {
                continue;
            }

            let mut cells = vec![(row, col)];
            if let Some(mate) = self.mate(row, col) {
                if mate != (row, col) && grid.get(mate.0, mate.1) != 0 {
                    cells.push(mate);
                }
            }
            if clues - cells.len() < floor {
                continue;
            }

            let saved: Vec<u8> = cells.iter().map(|&(r, c)| grid.get(r, c)).collect();
            for &(r, c) in &cells {
                grid.set(r, c, 0);
            }

            if solver.count_solutions(grid).count == 1 {
                clues -= cells.len();
            } else {
                for (&(r, c), &v) in cells.iter().zip(&saved) {
                    grid.set(r, c, v);
                }
            }
        }
    }

    /// The symmetric partner of a cell, when a symmetry is configured.
    fn mate(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let last = self.config.size - 1;
        match self.config.symmetry {
            Symmetry::None => None,
            Symmetry::Diagonal => Some((col, row)),
            Symmetry::Rotational180 => Some((last - row, last - col)),
        }
    }
}

//! Non-interactive command-line front end for the sudoku-dlx engine.

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use sudoku_dlx::{parse_puzzle, Difficulty, Generator, GeneratorConfig, Solver, Symmetry};

#[derive(Parser)]
#[command(name = "sudoku-dlx", version, about = "Exact-cover Sudoku solver and generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print its first solution
    Solve {
        /// Puzzle text: digits with '.' or '0' for blanks; whitespace
        /// separated tokens for sizes above 9
        puzzle: String,
        /// Board side length (must be a perfect square)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Emit JSON instead of a formatted board
        #[arg(long)]
        json: bool,
    },
    /// Count a puzzle's solutions
    Count {
        puzzle: String,
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Stop counting after this many solutions
        #[arg(long)]
        cap: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a puzzle with a unique solution
    Generate {
        /// Difficulty level, 1 (easiest) to 5 (hardest)
        #[arg(long, default_value_t = 3)]
        difficulty: u8,
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Fixed RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = SymmetryArg::None)]
        symmetry: SymmetryArg,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SymmetryArg {
    None,
    Diagonal,
    Rotational,
}

impl From<SymmetryArg> for Symmetry {
    fn from(arg: SymmetryArg) -> Self {
        match arg {
            SymmetryArg::None => Symmetry::None,
            SymmetryArg::Diagonal => Symmetry::Diagonal,
            SymmetryArg::Rotational => Symmetry::Rotational180,
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn check_size(size: usize) -> Result<(), String> {
    let root = (size as f64).sqrt() as usize;
    if root >= 2 && root * root == size && size <= u8::MAX as usize {
        Ok(())
    } else {
        Err(format!("size must be a perfect square >= 4, got {}", size))
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let solver = Solver::new();
    match cli.command {
        Command::Solve { puzzle, size, json } => {
            check_size(size)?;
            let grid = parse_puzzle(&puzzle, size).map_err(|e| e.to_string())?;
            let solved = solver
                .solve_first(&grid)
                .ok_or_else(|| "no solution".to_string())?;
            if json {
                println!("{}", serde_json::to_string(&solved).map_err(|e| e.to_string())?);
            } else {
                print!("{}", solved);
            }
        }
        Command::Count {
            puzzle,
            size,
            cap,
            json,
        } => {
            check_size(size)?;
            let grid = parse_puzzle(&puzzle, size).map_err(|e| e.to_string())?;
            let counted = match cap {
                Some(cap) => solver.count_solutions_up_to(&grid, cap),
                None => solver.count_solutions(&grid),
            };
            if json {
                println!("{}", serde_json::to_string(&counted).map_err(|e| e.to_string())?);
            } else {
                println!("solutions: {}", counted.count);
                if let Some(first) = counted.first_solution {
                    print!("{}", first);
                }
            }
        }
        Command::Generate {
            difficulty,
            size,
            seed,
            symmetry,
            json,
        } => {
            check_size(size)?;
            let difficulty = Difficulty::from_level(difficulty)
                .ok_or_else(|| format!("difficulty must be 1..=5, got {}", difficulty))?;
            let mut generator = Generator::with_config(GeneratorConfig {
                size,
                difficulty,
                symmetry: symmetry.into(),
                ..GeneratorConfig::default()
            });
            if let Some(seed) = seed {
                generator.reseed(seed);
            }
            let puzzle = generator.generate_with_config();
            eprintln!("clues: {}", puzzle.clue_count());
            if json {
                println!("{}", serde_json::to_string(&puzzle).map_err(|e| e.to_string())?);
            } else {
                print!("{}", puzzle);
            }
        }
    }
    Ok(())
}

//! Basic example of using the exact-cover Sudoku engine.

use sudoku_dlx::{parse_puzzle, Difficulty, Generator, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", puzzle);
    println!("Clues: {}", puzzle.clue_count());
    println!("Empty cells: {}\n", puzzle.empty_count());

    // Solve it
    let solver = Solver::new();
    println!("Solving...\n");
    if let Some(solution) = solver.solve_first(&puzzle) {
        println!("Solution:");
        println!("{}", solution);
    } else {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    }

    // Parse a puzzle from a string
    println!("--- Parsing a puzzle from string ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match parse_puzzle(puzzle_string, 9) {
        Ok(grid) => {
            println!("Parsed puzzle:");
            println!("{}", grid);

            let counted = solver.count_solutions(&grid);
            println!("Number of solutions: {}", counted.count);
        }
        Err(e) => eprintln!("Parse error: {}", e),
    }
}

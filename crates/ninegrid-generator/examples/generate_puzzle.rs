//! Example demonstrating puzzle generation from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use ninegrid_core::{DigitGrid, Position};
use ninegrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level of the generated puzzle.
    #[arg(short, long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to reproduce a puzzle (64 hex characters). Random if omitted.
    #[arg(short, long, value_name = "SEED")]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed.as_deref() {
        Some(text) => match text.parse() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => PuzzleSeed::random(),
    };

    let generator = PuzzleGenerator::new();
    let puzzle = match generator.generate_with_seed(args.difficulty.into(), seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!(
        "  {} ({} givens)",
        puzzle.difficulty,
        puzzle.problem.filled_count()
    );
    println!();
    println!("Problem:");
    print_grid(&puzzle.problem);
    println!();
    println!("Solution:");
    print_grid(&puzzle.solution);
}

fn print_grid(grid: &DigitGrid) {
    for y in 0..9 {
        print!(" ");
        for x in 0..9 {
            let cell = grid[Position::new(x, y)].map_or('_', |digit| {
                char::from_digit(u32::from(digit.value()), 10).unwrap()
            });
            if x % 3 == 0 {
                print!(" ");
            }
            print!("{cell}");
        }
        if y % 3 == 2 && y != 8 {
            println!();
        }
        println!();
    }
}

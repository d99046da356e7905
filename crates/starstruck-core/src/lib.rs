//! Core Starstruck engine.
//!
//! Starstruck puzzles partition an N×N grid into N connected regions such
//! that placing one star per row, per column, and per region, with no two
//! stars touching (even diagonally), has exactly one solution. This crate is
//! the combinatorial engine behind them: randomized star placement, region
//! growth by multi-source flood fill, connectivity validation, and a bounded
//! uniqueness proof, wrapped in a seeded generate-and-test loop.
//!
//! ```
//! use starstruck_core::Generator;
//!
//! let puzzle = Generator::new().generate_seeded(5, 42).unwrap();
//! assert_eq!(puzzle.size, 5);
//! println!("{}", puzzle);
//! ```
//!
//! Everything is synchronous and self-contained; the only randomness is the
//! explicit [`PuzzleRng`] stream, so a (size, seed) pair always reproduces
//! the same record.

mod generator;
mod grid;
mod placer;
mod regions;
mod rng;
mod solver;

pub use generator::{GenerateError, Generator, GeneratorConfig};
pub use grid::{Position, Puzzle};
pub use placer::place_stars;
pub use regions::{is_connected, RegionGrid};
pub use rng::{random_seed, PuzzleRng};
pub use solver::Solver;

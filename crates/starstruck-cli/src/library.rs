//! Puzzle library persistence.
//!
//! The library is an ordered JSON array of puzzles in the exact shape the
//! game loads: name, size, seed, the raw region-id matrix, and the binary
//! solution matrix.

use serde::{Deserialize, Serialize};
use starstruck_core::{Puzzle, RegionGrid};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One saved puzzle in the game's library format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPuzzle {
    pub name: String,
    pub size: usize,
    pub seed: u64,
    pub regions: RegionGrid,
    pub solution: Vec<Vec<u8>>,
}

impl SavedPuzzle {
    pub fn from_puzzle(name: String, puzzle: &Puzzle) -> Self {
        Self {
            name,
            size: puzzle.size,
            seed: puzzle.seed,
            regions: puzzle.regions.clone(),
            solution: puzzle.solution.clone(),
        }
    }
}

/// Default library location in the platform data directory.
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("starstruck_puzzles.json")
}

/// Load an existing library. A missing file is an empty library; an
/// unparseable one is reported and treated as empty, so the next save
/// overwrites it.
pub fn load(path: &Path) -> Vec<SavedPuzzle> {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(puzzles) => puzzles,
            Err(e) => {
                eprintln!("warning: could not parse {}: {}", path.display(), e);
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    }
}

/// Write the library as pretty-printed JSON.
pub fn save(path: &Path, puzzles: &[SavedPuzzle]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(puzzles)?;
    fs::write(path, json)
}

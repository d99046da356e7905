//! Terminal pretty-printing for generated puzzles.

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use starstruck_core::{Position, Puzzle};
use std::io::{self, Write};

/// Region backgrounds, cycled by region id.
const REGION_COLORS: [Color; 8] = [
    Color::Rgb { r: 66, g: 103, b: 210 },  // blue
    Color::Rgb { r: 62, g: 142, b: 65 },   // green
    Color::Rgb { r: 197, g: 57, b: 41 },   // red
    Color::Rgb { r: 136, g: 84, b: 208 },  // purple
    Color::Rgb { r: 230, g: 126, b: 34 },  // orange
    Color::Rgb { r: 120, g: 124, b: 126 }, // grey
    Color::Rgb { r: 121, g: 85, b: 72 },   // brown
    Color::Rgb { r: 212, g: 172, b: 13 },  // gold
];

/// Print a puzzle's region map and solution for visual inspection.
pub fn print_puzzle(out: &mut impl Write, puzzle: &Puzzle, name: &str) -> io::Result<()> {
    queue!(
        out,
        Print(format!(
            "\n  {}  (seed={}, {}x{})\n",
            name, puzzle.seed, puzzle.size, puzzle.size
        )),
        Print("  Regions:\n")
    )?;

    for row in 0..puzzle.size {
        queue!(out, Print("    "))?;
        for col in 0..puzzle.size {
            let id = puzzle.regions.id_at(Position::new(row, col)) as usize;
            queue!(
                out,
                SetBackgroundColor(REGION_COLORS[id % REGION_COLORS.len()]),
                Print("  ")
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }

    queue!(out, Print("  Solution:\n"))?;
    for row in 0..puzzle.size {
        queue!(out, Print("    "))?;
        for col in 0..puzzle.size {
            let mark = if puzzle.is_star(Position::new(row, col)) {
                "★ "
            } else {
                "· "
            };
            queue!(out, Print(mark))?;
        }
        queue!(out, Print("\n"))?;
    }

    let stars: Vec<(usize, usize)> = puzzle.stars.iter().map(|s| (s.row, s.col)).collect();
    queue!(out, Print(format!("  Stars: {:?}\n", stars)))?;
    out.flush()
}

//! Starstruck puzzle generator CLI.
//!
//! Generates validated puzzles in batches and either previews them on the
//! terminal or saves them as a JSON library the game can load.

mod catalog;
mod library;
mod render;

use clap::Parser;
use rand::Rng;
use starstruck_core::{Generator, GeneratorConfig};
use std::io;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  starstruck --save puzzles.json            generate 5x5 through 9x9 and save
  starstruck --size 8 --count 5             preview five 8x8 puzzles
  starstruck --size 8 --count 3 --save puzzles.json --append
  starstruck --size 10 --seed 123           reproducible 10x10
  starstruck --size 6 --save                save into the platform library file";

/// Starstruck puzzle generator.
#[derive(Debug, Parser)]
#[command(name = "starstruck", version, about, after_help = EXAMPLES)]
struct Cli {
    /// Grid size N; omit to generate one puzzle each of 5 through 9
    #[arg(long)]
    size: Option<usize>,

    /// Number of puzzles per size
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Starting random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Save puzzles as a JSON file loadable in the game; without FILE, the
    /// platform library file is used
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    save: Option<Option<PathBuf>>,

    /// Append to the save file instead of overwriting
    #[arg(long)]
    append: bool,

    /// Override the attempt budget per puzzle
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Report the seed tried for each puzzle
    #[arg(long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let mut stdout = io::stdout();

    let sizes: Vec<usize> = match cli.size {
        Some(size) => vec![size],
        None => vec![5, 6, 7, 8, 9],
    };

    let generator = Generator::with_config(GeneratorConfig {
        max_attempts: cli.max_attempts,
        ..GeneratorConfig::default()
    });

    let mut puzzles = Vec::new();
    for &size in &sizes {
        println!(
            "Generating {} puzzle(s) of size {}x{}...",
            cli.count, size, size
        );

        // Every puzzle gets its own seed, incrementing from the start, so a
        // batch is reproducible from --seed alone. A single failure skips to
        // the next seed rather than aborting the batch.
        let mut seed = cli
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..100_000));

        for i in 0..cli.count {
            if cli.verbose {
                println!("  {}/{}: trying seed {}...", i + 1, cli.count, seed);
            }
            match generator.generate_seeded(size, seed) {
                Ok(puzzle) => {
                    let name = catalog::name_for(size, puzzles.len());
                    render::print_puzzle(&mut stdout, &puzzle, &name)?;
                    puzzles.push(library::SavedPuzzle::from_puzzle(name, &puzzle));
                }
                Err(e) => {
                    eprintln!("  {}/{}: {}", i + 1, cli.count, e);
                }
            }
            seed += 1;
        }
    }

    if puzzles.is_empty() {
        println!("\nNo puzzles generated.");
        return Ok(());
    }

    match cli.save {
        Some(path) => {
            let path = path.unwrap_or_else(library::default_path);
            let mut combined = if cli.append {
                let existing = library::load(&path);
                if !existing.is_empty() {
                    println!(
                        "\nLoaded {} existing puzzle(s) from {}",
                        existing.len(),
                        path.display()
                    );
                }
                existing
            } else {
                Vec::new()
            };

            let new_count = puzzles.len();
            combined.extend(puzzles);
            library::save(&path, &combined)?;
            println!(
                "\nSaved {} new puzzle(s) ({} total) to {}",
                new_count,
                combined.len(),
                path.display()
            );
        }
        None => {
            println!("\nJSON preview (use --save to write a file):");
            println!("{}", serde_json::to_string_pretty(&puzzles)?);
        }
    }

    Ok(())
}

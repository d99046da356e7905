//! Display names for generated puzzles.
//!
//! Small grids get animal names, mid sizes star names, and large sizes
//! numbered series; past the table a puzzle falls back to a plain label.

fn names_for(size: usize) -> &'static [&'static str] {
    match size {
        5 => &[
            "The Cub", "The Fox", "The Owl", "The Hare", "The Swan", "The Wren", "The Deer",
            "The Wolf", "The Lynx", "The Heron",
        ],
        6 => &[
            "Vega", "Altair", "Deneb", "Regulus", "Spica", "Antares", "Pollux", "Castor",
            "Arcturus", "Capella",
        ],
        7 => &[
            "Orion",
            "Cassiopeia",
            "Andromeda",
            "Perseus",
            "Lyra",
            "Aquila",
            "Cygnus",
            "Draco",
            "Hercules",
            "Boötes",
        ],
        8 => &[
            "Sagittarius",
            "Scorpius",
            "Gemini",
            "Taurus",
            "Leo",
            "Virgo",
            "Aquarius",
            "Pisces",
            "Capricorn",
            "Libra",
        ],
        9 => &[
            "Nebula I",
            "Nebula II",
            "Nebula III",
            "Nebula IV",
            "Nebula V",
            "Nebula VI",
            "Nebula VII",
            "Nebula VIII",
            "Nebula IX",
            "Nebula X",
        ],
        10 => &[
            "Cluster I",
            "Cluster II",
            "Cluster III",
            "Cluster IV",
            "Cluster V",
            "Cluster VI",
            "Cluster VII",
            "Cluster VIII",
            "Cluster IX",
            "Cluster X",
        ],
        11 => &["Void I", "Void II", "Void III", "Void IV", "Void V"],
        12 => &["Cosmos I", "Cosmos II", "Cosmos III", "Cosmos IV", "Cosmos V"],
        _ => &[],
    }
}

/// Name for the `index`-th puzzle of a batch.
pub fn name_for(size: usize, index: usize) -> String {
    match names_for(size).get(index) {
        Some(name) => (*name).to_string(),
        None => format!("Puzzle {} ({size}×{size})", index + 1),
    }
}

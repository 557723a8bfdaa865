//! Writes a generated structure to disk as `InteractionSet` JSON.
//!
//! Usage: `gen-fixture [small|medium|large] [seed]`. Defaults to the large
//! tier with seed 42. The file lands in `target/bench-fixtures/` and can be
//! fed to any consumer of `nacycle_core::InteractionSet`.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use nacycle_bench::{SizeTier, fixture_path, generate_structure};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let tier_name = args.next().unwrap_or_else(|| "large".to_owned());
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 42,
    };
    let tier = match tier_name.as_str() {
        "small" => SizeTier::Small,
        "medium" => SizeTier::Medium,
        "large" => SizeTier::Large,
        other => {
            return Err(format!("unknown tier {other:?}; expected small, medium or large").into());
        }
    };

    let path = fixture_path(&format!("{tier_name}-{seed}"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Generating {tier:?} tier (seed {seed})...");
    let set = generate_structure(&tier.config(seed));
    eprintln!(
        "Generated {} nucleotides, {} interactions",
        set.vertices.len(),
        set.interactions.len()
    );

    eprintln!("Writing JSON to {}...", path.display());
    let out = fs::File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(out), &set)?;

    Ok(())
}

//! Nucleic-acid structure generator and benchmark utilities for nacycle.
//!
//! This crate provides deterministic generation of folded-RNA interaction
//! sets for benchmarking and property-based testing of `nacycle-core`.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_structure};

/// Returns the path where a generated fixture named `name` is stored.
///
/// Fixtures live under `target/bench-fixtures/` so they are gitignored and
/// shared between the generator binary and the benchmark harness.
pub fn fixture_path(name: &str) -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join(format!("{name}.json"))
}

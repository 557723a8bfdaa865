//! Synthetic nucleic-acid interaction graph generator.
//!
//! Produces valid [`InteractionSet`] instances shaped like folded RNA: one
//! or more strands of nucleotides joined by backbone interactions, folded
//! into hairpin stems, with optional pseudoknot pairs and long-range
//! tertiary contacts.

pub mod topology;

use nacycle_core::InteractionSet;
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_structure;

/// Configuration for the structure generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of independent strands (chains).
    pub num_strands: usize,
    /// Nucleotides per strand.
    pub strand_length: usize,
    /// Base pairs per hairpin stem.
    pub stem_length: usize,
    /// Minimum unpaired nucleotides closing a hairpin loop (at least 3).
    pub loop_length: usize,
    /// Probability that a hairpin loop pairs with the region after its stem.
    pub pseudoknot_rate: f64,
    /// Number of random long-range contacts across the whole structure.
    pub tertiary_contacts: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~80 nucleotides, one strand.
    Small,
    /// ~600 nucleotides, two strands.
    Medium,
    /// ~3000 nucleotides, four strands.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_strands: 1,
                strand_length: 80,
                stem_length: 5,
                loop_length: 4,
                pseudoknot_rate: 0.2,
                tertiary_contacts: 2,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_strands: 2,
                strand_length: 300,
                stem_length: 6,
                loop_length: 5,
                pseudoknot_rate: 0.15,
                tertiary_contacts: 6,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_strands: 4,
                strand_length: 750,
                stem_length: 7,
                loop_length: 5,
                pseudoknot_rate: 0.1,
                tertiary_contacts: 12,
            },
        }
    }
}

/// Generates an interaction set from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_structure(config: &GeneratorConfig) -> InteractionSet {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_structure(config, &mut rng)
}

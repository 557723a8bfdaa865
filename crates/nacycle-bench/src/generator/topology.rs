//! Topology strategies: strand backbones, hairpin stems, pseudoknot pairs
//! and long-range tertiary contacts.

use std::collections::HashSet;

use nacycle_core::{Interaction, InteractionSet, Vertex};
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

const BASES: [char; 4] = ['A', 'C', 'G', 'U'];
const TERTIARY_CLASSES: [&str; 4] = ["tSH", "cHS", "tWH", "cSS"];

/// Interaction class of backbone links.
pub const BACKBONE: &str = "backbone";
/// Interaction class of canonical Watson-Crick pairs.
pub const CANONICAL_PAIR: &str = "cWW";

const BACKBONE_WEIGHT: f64 = 1.0;
const PAIR_WEIGHT: f64 = 0.5;
const TERTIARY_WEIGHT: f64 = 2.0;

#[derive(Default)]
struct Builder {
    vertices: Vec<Vertex>,
    interactions: Vec<Interaction>,
    joined: HashSet<(usize, usize)>,
}

impl Builder {
    fn add_nucleotide(&mut self, chain: char, base: char, position: usize) -> usize {
        let index = self.vertices.len();
        let mut vertex = Vertex::new(format!("nt-{index}"));
        vertex.label = Some(format!("{chain}:{base}{position}"));
        self.vertices.push(vertex);
        index
    }

    /// Adds an interaction unless it would be a self-loop or parallel edge.
    fn try_join(&mut self, a: usize, b: usize, class: &str, weight: f64) -> bool {
        if a == b || !self.joined.insert((a.min(b), a.max(b))) {
            return false;
        }
        let id = format!("i-{}", self.interactions.len());
        self.interactions.push(
            Interaction::new(id, format!("nt-{a}"), format!("nt-{b}"))
                .with_weight(weight)
                .with_class(class),
        );
        true
    }
}

/// Builds a complete interaction set from the generator configuration.
pub fn build_structure(config: &GeneratorConfig, rng: &mut StdRng) -> InteractionSet {
    let mut builder = Builder::default();

    for strand in 0..config.num_strands {
        let chain = char::from(b'A' + (strand % 26) as u8);
        let start = builder.vertices.len();
        for position in 1..=config.strand_length {
            let base = BASES[rng.gen_range(0..BASES.len())];
            builder.add_nucleotide(chain, base, position);
        }
        let end = builder.vertices.len();

        for i in start..end.saturating_sub(1) {
            builder.try_join(i, i + 1, BACKBONE, BACKBONE_WEIGHT);
        }
        fold_hairpins(config, rng, &mut builder, start, end);
    }

    add_tertiary_contacts(config, rng, &mut builder);

    InteractionSet {
        vertices: builder.vertices,
        interactions: builder.interactions,
    }
}

/// Folds `start..end` into consecutive hairpins.
///
/// Each hairpin is `stem_length` pairs closing a loop of at least three
/// nucleotides. Hairpins never cross each other; a pseudoknot pair may join
/// a loop nucleotide to the linker that follows the hairpin.
fn fold_hairpins(
    config: &GeneratorConfig,
    rng: &mut StdRng,
    builder: &mut Builder,
    start: usize,
    end: usize,
) {
    let stem = config.stem_length;
    let loop_len = config.loop_length.max(3);
    let span = 2 * stem + loop_len;
    let knot_rate = config.pseudoknot_rate.clamp(0.0, 1.0);
    if stem == 0 {
        return;
    }

    let mut cursor = start + rng.gen_range(0..3);
    while cursor + span <= end {
        for k in 0..stem {
            builder.try_join(cursor + k, cursor + span - 1 - k, CANONICAL_PAIR, PAIR_WEIGHT);
        }

        let linker_start = cursor + span;
        let linker_len = rng.gen_range(2..6);
        if rng.gen_bool(knot_rate) && linker_start + 1 < end {
            let loop_nt = cursor + stem + rng.gen_range(0..loop_len);
            builder.try_join(loop_nt, linker_start + 1, CANONICAL_PAIR, PAIR_WEIGHT);
        }
        cursor = linker_start + linker_len;
    }
}

/// Adds `config.tertiary_contacts` random long-range contacts.
///
/// Contacts join nucleotides at least four positions apart; attempts that
/// hit an existing interaction are retried a bounded number of times.
fn add_tertiary_contacts(config: &GeneratorConfig, rng: &mut StdRng, builder: &mut Builder) {
    let n = builder.vertices.len();
    if n < 5 {
        return;
    }
    let mut placed = 0;
    let mut attempts = 0;
    while placed < config.tertiary_contacts && attempts < config.tertiary_contacts * 16 {
        attempts += 1;
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a.abs_diff(b) < 4 {
            continue;
        }
        let class = TERTIARY_CLASSES[rng.gen_range(0..TERTIARY_CLASSES.len())];
        if builder.try_join(a, b, class, TERTIARY_WEIGHT) {
            placed += 1;
        }
    }
}

//! Builder configuration, loadable from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the fundamental builder picks its spanning forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanningTreeStrategy {
    /// Kruskal over ascending edge weight; ties keep edge enumeration order.
    #[default]
    MinimumWeight,
    /// Breadth-first forest, rooted at each component's first vertex in
    /// enumeration order. Ignores weights.
    BreadthFirst,
}

/// Tuning knobs shared by both basis builders.
///
/// The defaults reproduce the plain entry points
/// ([`crate::fundamental_cycle_basis`], [`crate::chordless_cycle_basis`]).
/// Options deserialize from JSON with every field optional:
///
/// ```json
/// { "spanning_tree": "breadth_first", "max_cycle_len": 8 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct BasisOptions {
    /// Spanning forest used by the fundamental builder.
    pub spanning_tree: SpanningTreeStrategy,

    /// Upper bound on the number of vertices of a chordless cycle. Longer
    /// candidate paths are abandoned. `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cycle_len: Option<usize>,
}

impl BasisOptions {
    /// Parses options from a JSON document.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Parse`] for malformed JSON or unknown fields,
    /// [`OptionsError::MaxCycleLenTooSmall`] if `max_cycle_len` is below 3.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| OptionsError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks field ranges.
    ///
    /// # Errors
    ///
    /// [`OptionsError::MaxCycleLenTooSmall`] if `max_cycle_len` is below 3.
    pub fn validate(&self) -> Result<(), OptionsError> {
        match self.max_cycle_len {
            Some(n) if n < 3 => Err(OptionsError::MaxCycleLenTooSmall(n)),
            Some(_) | None => Ok(()),
        }
    }

    /// Sets the spanning forest strategy.
    #[must_use]
    pub fn with_spanning_tree(mut self, strategy: SpanningTreeStrategy) -> Self {
        self.spanning_tree = strategy;
        self
    }

    /// Bounds chordless cycle length.
    #[must_use]
    pub fn with_max_cycle_len(mut self, max: usize) -> Self {
        self.max_cycle_len = Some(max);
        self
    }
}

/// Errors raised while loading [`BasisOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The document is not valid options JSON.
    Parse(String),
    /// `max_cycle_len` cannot admit any cycle.
    MaxCycleLenTooSmall(usize),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Parse(msg) => write!(f, "invalid basis options: {msg}"),
            OptionsError::MaxCycleLenTooSmall(n) => {
                write!(f, "max_cycle_len must be at least 3, got {n}")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

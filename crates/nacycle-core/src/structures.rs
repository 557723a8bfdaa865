use serde::{Deserialize, Serialize};

/// A vertex of an interaction set, typically one nucleotide.
///
/// The engine treats vertices as opaque; `id` only has to be unique within
/// one [`InteractionSet`]. `label` is carried through to the graph for
/// callers that render cycles (for example `"A:12"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Vertex {
    /// Set-local identifier.
    pub id: String,

    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Vertex {
    /// Creates an unlabeled vertex.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// An undirected, weighted interaction between two vertices.
///
/// Parallel interactions (several annotations for the same pair of
/// nucleotides) must be merged by the caller before the set is handed to
/// [`crate::build_graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Interaction {
    /// Set-local identifier.
    pub id: String,

    /// Id of the first endpoint.
    pub source: String,

    /// Id of the second endpoint.
    pub target: String,

    /// Spanning-tree weight. Must be finite and non-negative.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Opaque interaction class (for example a base-pair family or
    /// `"backbone"`). Only consumed by caller-supplied canonical encoders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

impl Interaction {
    /// Creates an interaction with weight `1.0` and no class.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            weight: default_weight(),
            class: None,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the interaction class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// In-memory description of one interaction graph.
///
/// This is the input of [`crate::build_graph`]. It deserializes from JSON of
/// the form
///
/// ```json
/// {
///   "vertices": [{ "id": "v1" }, { "id": "v2", "label": "G:2" }],
///   "interactions": [{ "id": "a", "source": "v1", "target": "v2", "weight": 1.0 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InteractionSet {
    /// All vertices, in insertion order.
    #[serde(default)]
    pub vertices: Vec<Vertex>,

    /// All interactions, in insertion order.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

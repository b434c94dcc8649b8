//! Edge record.
//!
//! Edges are directed (source, target) pairs of node identifiers. The
//! weight in (0, 1] expresses relationship strength and participates in
//! force-directed attraction and the crossing cost; the `kind` tag is
//! opaque to layout math and consumed by callers.

use serde::{Deserialize, Serialize};

/// A directed, weighted relationship between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier of the source node.
    pub source: String,

    /// Identifier of the target node.
    pub target: String,

    /// Relationship strength in (0, 1].
    #[serde(default = "default_weight")]
    pub weight: f32,

    /// Relationship type tag, e.g. "import" or "dependency". Ignored by
    /// layout math.
    #[serde(default)]
    pub kind: String,
}

fn default_weight() -> f32 {
    1.0
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            kind: String::new(),
        }
    }
}

//! Node record.
//!
//! Nodes are created by an external data source before layout runs. Each
//! node has:
//! - A unique string identifier
//! - A mutable 3D position, seeded randomly within bounds when absent
//! - Opaque `size` and `metadata` fields that layout logic never touches

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// A graph vertex representing a code or architecture entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, e.g. a module path or file name.
    pub id: String,

    /// Current position. `None` until the engine assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,

    /// Visual size hint, passed through untouched.
    #[serde(default = "default_size")]
    pub size: f32,

    /// Caller-owned payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

fn default_size() -> f32 {
    1.0
}

impl Node {
    /// Create a node with no position yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: None,
            size: default_size(),
            metadata: None,
        }
    }

    /// Create a node at a known position.
    pub fn at(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::new(id)
        }
    }

    /// Current position, treating an unassigned node as sitting at the origin.
    #[inline]
    pub(crate) fn pos(&self) -> Vec3 {
        self.position.unwrap_or(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_position() {
        let node = Node::new("core/engine");
        assert_eq!(node.id, "core/engine");
        assert!(node.position.is_none());
        assert_eq!(node.size, 1.0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: Node = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert!(node.position.is_none());
        assert_eq!(node.size, 1.0);
        assert!(node.metadata.is_none());
    }

    #[test]
    fn test_metadata_round_trip() {
        let json = r#"{"id": "a", "size": 2.5, "metadata": {"lines": 120, "lang": "ts"}}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.size, 2.5);

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["metadata"]["lines"], 120);
        assert_eq!(back["metadata"]["lang"], "ts");
    }
}

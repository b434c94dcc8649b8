//! Layout algorithms for 3D dependency-graph visualization.
//!
//! Each algorithm assigns positions to every node given the edge set, a
//! parameter record, and a bounding box; positions are written in place and
//! always end up inside the box. Algorithms never add, remove, or rename
//! nodes or edges.
//!
//! The stochastic pieces (initial placement, depth jitter, the crossing
//! optimizer) draw from a caller-supplied random source so that runs are
//! reproducible under a fixed seed.

pub mod circular;
pub mod crossing;
pub mod force;
pub mod grid;
pub mod hierarchical;
pub mod tree;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::{BoundingBox, Vec3};
use crate::graph::{Edge, Node};

pub use crossing::{crossing_cost, crossing_count, optimize_layout};

/// Selects which layout algorithm a call dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutAlgorithm {
    /// Iterative repulsion/spring simulation.
    #[default]
    ForceDirected,
    /// Topological leveling, roots at the top.
    Hierarchical,
    /// Ring placement around the box centroid.
    Circular,
    /// Recursive placement from in-degree-zero roots.
    Tree,
    /// Row/column placement in the horizontal plane.
    Grid,
}

/// Caller-supplied layout parameters.
///
/// All fields have defaults so JS callers can pass a partial object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutParams {
    /// Desired minimum separation between related nodes (default: 10.0).
    pub node_spacing: f32,
    /// Spring rest length for force-directed edges (default: 30.0).
    pub edge_length: f32,
    /// Pairwise repulsion strength (default: 100.0).
    pub repulsion_strength: f32,
    /// Spring attraction strength (default: 0.05).
    pub attraction_strength: f32,
    /// Simulation iteration count; non-positive means no work (default: 100).
    pub iterations: i32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            node_spacing: 10.0,
            edge_length: 30.0,
            repulsion_strength: 100.0,
            attraction_strength: 0.05,
            iterations: 100,
        }
    }
}

/// Run the selected layout algorithm, mutating node positions in place.
///
/// Nodes without a position are first seeded uniformly at random inside
/// `bounds`. Dangling edges are skipped throughout. The only error is an
/// inverted bounding box.
pub fn apply_layout<R: Rng>(
    nodes: &mut [Node],
    edges: &[Edge],
    algorithm: LayoutAlgorithm,
    params: &LayoutParams,
    bounds: &BoundingBox,
    rng: &mut R,
) -> Result<(), LayoutError> {
    bounds.validate()?;
    if nodes.is_empty() {
        return Ok(());
    }

    seed_missing_positions(nodes, bounds, rng);

    match algorithm {
        LayoutAlgorithm::ForceDirected => force::apply(nodes, edges, params, bounds),
        LayoutAlgorithm::Hierarchical => hierarchical::apply(nodes, edges, bounds, rng),
        LayoutAlgorithm::Circular => circular::apply(nodes, bounds, rng),
        LayoutAlgorithm::Tree => tree::apply(nodes, edges, params, bounds, rng),
        LayoutAlgorithm::Grid => grid::apply(nodes, params, bounds, rng),
    }

    Ok(())
}

/// Assign a uniform random in-bounds position to every node that has none.
fn seed_missing_positions<R: Rng>(nodes: &mut [Node], bounds: &BoundingBox, rng: &mut R) {
    let size = bounds.size();
    for node in nodes.iter_mut() {
        if node.position.is_none() {
            node.position = Some(Vec3::new(
                bounds.min.x + rng.random::<f32>() * size.x,
                bounds.min.y + rng.random::<f32>() * size.y,
                bounds.min.z + rng.random::<f32>() * size.z,
            ));
        }
    }
}

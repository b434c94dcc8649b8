//! Force-directed layout.
//!
//! Simulates a physical system where every node pair repels (spreading
//! nodes apart) while connected pairs are pulled toward a target
//! separation (keeping related nodes close).
//!
//! # Algorithm
//!
//! Per iteration:
//! 1. **Repulsion**: every unordered node pair at distance `d` receives an
//!    opposing force of magnitude `repulsion_strength / d²` along the line
//!    between them. Pairs closer than `MIN_DISTANCE` are skipped so
//!    coincident points cannot produce singular forces.
//! 2. **Attraction**: every resolved edge acts as a linear spring with rest
//!    length `edge_length`; the signed magnitude
//!    `attraction_strength × (d − edge_length) × weight` pulls the
//!    endpoints together when stretched and apart when compressed.
//! 3. **Integration**: each node's accumulated force is scaled by a fixed
//!    damping factor and added to its position, which is then clamped into
//!    the bounding box.
//!
//! Given fixed starting positions the simulation is deterministic; only
//! the initial random placement of unpositioned nodes varies between
//! unseeded runs.

use crate::geometry::{BoundingBox, Vec3};
use crate::graph::{Edge, GraphIndex, Node};

use super::LayoutParams;

/// Pairs closer than this are skipped in the repulsion pass.
const MIN_DISTANCE: f32 = 0.1;

/// Fixed damping applied to accumulated forces before integration.
const DAMPING: f32 = 0.9;

pub fn apply(nodes: &mut [Node], edges: &[Edge], params: &LayoutParams, bounds: &BoundingBox) {
    let iterations = params.iterations.max(0);
    let index = GraphIndex::build(nodes, edges);
    let springs: Vec<(usize, usize, f32)> = index.edges().collect();

    let mut positions: Vec<Vec3> = nodes.iter().map(Node::pos).collect();

    for _ in 0..iterations {
        let mut forces = vec![Vec3::ZERO; positions.len()];

        // Pairwise repulsion, accumulated oppositely on both nodes
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let delta = positions[i] - positions[j];
                let distance = delta.length();
                if distance < MIN_DISTANCE {
                    continue;
                }

                let magnitude = params.repulsion_strength / (distance * distance);
                let direction = delta * (1.0 / distance);
                forces[i] += direction * magnitude;
                forces[j] -= direction * magnitude;
            }
        }

        // Spring attraction along each edge; self-loops have a zero
        // displacement vector and contribute nothing
        for &(source, target, weight) in &springs {
            let delta = positions[target] - positions[source];
            let distance = delta.length();
            if distance < f32::EPSILON {
                continue;
            }

            let magnitude =
                params.attraction_strength * (distance - params.edge_length) * weight;
            let direction = delta * (1.0 / distance);
            forces[source] += direction * magnitude;
            forces[target] -= direction * magnitude;
        }

        for (position, force) in positions.iter_mut().zip(&forces) {
            *position = bounds.clamp(*position + *force * DAMPING);
        }
    }

    for (node, position) in nodes.iter_mut().zip(positions) {
        node.position = Some(bounds.clamp(position));
    }
}

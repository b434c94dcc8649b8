//! Hierarchical layout.
//!
//! Places nodes in horizontal bands by dependency depth, roots at the top.
//!
//! # Algorithm
//!
//! Kahn's topological sort, processed level by level: the in-degree-zero
//! frontier forms level 0; draining a level decrements the in-degree of
//! each successor and collects the newly-free nodes as the next level.
//!
//! Nodes on or downstream of a cycle never drain. They are pinned onto the
//! final computed level rather than left unpositioned, so every node ends
//! up inside the bounding box on every input. A fully cyclic graph
//! collapses to a single level.

use rand::Rng;

use crate::geometry::{BoundingBox, Vec3};
use crate::graph::{Edge, GraphIndex, Node};

/// Fraction of the box depth used for z separation within a level.
const DEPTH_JITTER: f32 = 0.3;

pub fn apply<R: Rng>(nodes: &mut [Node], edges: &[Edge], bounds: &BoundingBox, rng: &mut R) {
    if nodes.is_empty() {
        return;
    }

    let index = GraphIndex::build(nodes, edges);
    let mut in_degree = index.in_degrees();

    let mut frontier: Vec<usize> = (0..nodes.len()).filter(|&s| in_degree[s] == 0).collect();
    let mut leveled = vec![false; nodes.len()];
    let mut levels: Vec<Vec<usize>> = Vec::new();

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &slot in &frontier {
            leveled[slot] = true;
            for successor in index.successors(slot) {
                in_degree[successor] -= 1;
                if in_degree[successor] == 0 {
                    next.push(successor);
                }
            }
        }
        levels.push(std::mem::replace(&mut frontier, next));
    }

    // Cyclic leftovers: pin to the final computed level
    let leftovers: Vec<usize> = (0..nodes.len()).filter(|&s| !leveled[s]).collect();
    if !leftovers.is_empty() {
        match levels.last_mut() {
            Some(last) => last.extend(leftovers),
            None => levels.push(leftovers),
        }
    }

    let size = bounds.size();
    let center = bounds.center();
    let step = size.y / (levels.len().saturating_sub(1)).max(1) as f32;

    for (depth, level) in levels.iter().enumerate() {
        let y = bounds.max.y - depth as f32 * step;
        let count = level.len() as f32;
        for (i, &slot) in level.iter().enumerate() {
            let x = bounds.min.x + size.x * (i as f32 + 0.5) / count;
            let z = center.z + (rng.random::<f32>() - 0.5) * DEPTH_JITTER * size.z;
            nodes[slot].position = Some(Vec3::new(x, y, z));
        }
    }
}

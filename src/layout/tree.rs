//! Tree layout.
//!
//! Recursive depth-first placement for rooted, tree-dominant graphs. Roots
//! are the in-degree-zero nodes (falling back to the first node when none
//! qualify). Each root is placed at the current horizontal cursor on the
//! top face of the box; its unvisited children are spread evenly
//! left-to-right, centered under the parent, one spacing level below, and
//! recursed into. A shared visited set keeps the first-assigned position
//! for nodes reachable via multiple paths.
//!
//! Children follow edge order, so sibling placement is deterministic.
//! Positions are clamped into the bounding box so deep or wide trees
//! cannot escape it.

use rand::Rng;

use crate::geometry::{BoundingBox, Vec3};
use crate::graph::{Edge, GraphIndex, Node};

use super::LayoutParams;

/// Fraction of the box depth used for z separation.
const DEPTH_JITTER: f32 = 0.3;

pub fn apply<R: Rng>(
    nodes: &mut [Node],
    edges: &[Edge],
    params: &LayoutParams,
    bounds: &BoundingBox,
    rng: &mut R,
) {
    if nodes.is_empty() {
        return;
    }

    let index = GraphIndex::build(nodes, edges);
    let in_degree = index.in_degrees();

    // Children adjacency in edge order, deduplicated across parallel edges
    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for (source, target, _) in index.edges() {
        if source != target && !children_of[source].contains(&target) {
            children_of[source].push(target);
        }
    }

    let mut roots: Vec<usize> = (0..nodes.len()).filter(|&s| in_degree[s] == 0).collect();
    if roots.is_empty() {
        roots.push(0);
    }

    let mut visited = vec![false; nodes.len()];
    let mut cursor = bounds.center().x;

    for root in roots {
        if visited[root] {
            continue;
        }
        place_subtree(
            root,
            cursor,
            bounds.max.y,
            nodes,
            &children_of,
            &mut visited,
            params,
            bounds,
            rng,
        );
        cursor += params.node_spacing;
    }
}

#[allow(clippy::too_many_arguments)]
fn place_subtree<R: Rng>(
    slot: usize,
    x: f32,
    y: f32,
    nodes: &mut [Node],
    children_of: &[Vec<usize>],
    visited: &mut [bool],
    params: &LayoutParams,
    bounds: &BoundingBox,
    rng: &mut R,
) {
    if visited[slot] {
        return;
    }
    visited[slot] = true;

    let size = bounds.size();
    let z = bounds.center().z + (rng.random::<f32>() - 0.5) * DEPTH_JITTER * size.z;
    nodes[slot].position = Some(bounds.clamp(Vec3::new(x, y, z)));

    let children: Vec<usize> = children_of[slot]
        .iter()
        .copied()
        .filter(|&c| !visited[c])
        .collect();
    if children.is_empty() {
        return;
    }

    let start = x - (children.len() as f32 - 1.0) * params.node_spacing * 0.5;
    for (i, &child) in children.iter().enumerate() {
        place_subtree(
            child,
            start + i as f32 * params.node_spacing,
            y - params.node_spacing,
            nodes,
            children_of,
            visited,
            params,
            bounds,
            rng,
        );
    }
}

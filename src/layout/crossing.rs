//! Edge-crossing measurement and the crossing-minimization optimizer.
//!
//! Two edges "cross" when their projections onto the horizontal (x, z)
//! plane intersect within both segments. The test is the standard
//! parametric line intersection: a pair crosses when both parameters t and
//! u lie in [0, 1]. Intersections exactly at t = 0 or t = 1 count, so
//! edges sharing an endpoint register as crossings; this simplification is
//! deliberate.
//!
//! The optimizer is a randomized local search: perturb one random node at
//! a time, keep the move only when the full crossing cost strictly
//! improves, and write back the best snapshot at the end. Each evaluation
//! tests every unordered edge pair, so a full pass costs O(trials × E²);
//! callers with large edge sets should expect this to dominate runtime.

use rand::Rng;
use std::collections::HashMap;

use crate::geometry::Vec3;
use crate::graph::{Edge, Node};

use super::LayoutParams;

/// Number of perturbation trials per optimizer pass.
const TRIALS: usize = 100;

/// Perturbation magnitude as a fraction of the node spacing.
const PERTURBATION_FACTOR: f32 = 0.5;

/// An edge resolved to endpoint positions, projected onto the horizontal
/// plane, with its weight.
struct Segment {
    ax: f32,
    az: f32,
    bx: f32,
    bz: f32,
    weight: f32,
}

fn resolve_segments(nodes: &[Node], edges: &[Edge]) -> Vec<Segment> {
    let mut position_of: HashMap<&str, Vec3> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        if let Some(p) = node.position {
            position_of.entry(node.id.as_str()).or_insert(p);
        }
    }

    edges
        .iter()
        .filter_map(|edge| {
            let a = position_of.get(edge.source.as_str())?;
            let b = position_of.get(edge.target.as_str())?;
            Some(Segment {
                ax: a.x,
                az: a.z,
                bx: b.x,
                bz: b.z,
                weight: edge.weight,
            })
        })
        .collect()
}

/// Parametric 2D segment intersection over the horizontal projection.
fn segments_cross(p: &Segment, q: &Segment) -> bool {
    let d1x = p.bx - p.ax;
    let d1z = p.bz - p.az;
    let d2x = q.bx - q.ax;
    let d2z = q.bz - q.az;

    let denominator = d1x * d2z - d1z * d2x;
    if denominator.abs() < f32::EPSILON {
        // Parallel or degenerate; never a crossing
        return false;
    }

    let ox = q.ax - p.ax;
    let oz = q.az - p.az;
    let t = (ox * d2z - oz * d2x) / denominator;
    let u = (ox * d1z - oz * d1x) / denominator;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Weighted crossing cost: each crossing pair contributes the product of
/// the two edge weights. With unit weights this equals the crossing count.
pub fn crossing_cost(nodes: &[Node], edges: &[Edge]) -> f32 {
    let segments = resolve_segments(nodes, edges);
    let mut cost = 0.0;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if segments_cross(&segments[i], &segments[j]) {
                cost += segments[i].weight * segments[j].weight;
            }
        }
    }
    cost
}

/// Unweighted number of crossing edge pairs.
pub fn crossing_count(nodes: &[Node], edges: &[Edge]) -> usize {
    let segments = resolve_segments(nodes, edges);
    let mut count = 0;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if segments_cross(&segments[i], &segments[j]) {
                count += 1;
            }
        }
    }
    count
}

/// Refine an existing layout in place by randomized local search over the
/// crossing cost. The cost after a pass is never greater than before.
pub fn optimize_layout<R: Rng>(
    nodes: &mut [Node],
    edges: &[Edge],
    params: &LayoutParams,
    rng: &mut R,
) {
    if nodes.is_empty() || edges.is_empty() {
        return;
    }

    let mut best_cost = crossing_cost(nodes, edges);
    let mut best_positions: Vec<Option<Vec3>> = nodes.iter().map(|n| n.position).collect();
    let scale = params.node_spacing * PERTURBATION_FACTOR;

    for _ in 0..TRIALS {
        let pick = rng.random_range(0..nodes.len());
        let original = nodes[pick].position;

        let offset = Vec3::new(
            (rng.random::<f32>() - 0.5) * scale,
            (rng.random::<f32>() - 0.5) * scale,
            (rng.random::<f32>() - 0.5) * scale,
        );
        nodes[pick].position = Some(nodes[pick].pos() + offset);

        let cost = crossing_cost(nodes, edges);
        if cost < best_cost {
            best_cost = cost;
            best_positions[pick] = nodes[pick].position;
        } else {
            nodes[pick].position = original;
        }
    }

    for (node, position) in nodes.iter_mut().zip(best_positions) {
        node.position = position;
    }
}

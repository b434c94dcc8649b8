//! Grid layout.
//!
//! Closed-form row/column placement in the horizontal plane: the grid side
//! is `ceil(√N)`, node i occupies `row = i / side`, `col = i % side`, and
//! cells are mapped linearly into the box's horizontal extent with
//! half-cell insets. The vertical coordinate gets a small random jitter
//! scaled by the node spacing.

use rand::Rng;

use crate::geometry::{BoundingBox, Vec3};
use crate::graph::Node;

use super::LayoutParams;

pub fn apply<R: Rng>(nodes: &mut [Node], params: &LayoutParams, bounds: &BoundingBox, rng: &mut R) {
    let count = nodes.len();
    if count == 0 {
        return;
    }

    let side = (count as f32).sqrt().ceil() as usize;
    let size = bounds.size();
    let center_y = bounds.center().y;

    for (i, node) in nodes.iter_mut().enumerate() {
        let row = i / side;
        let col = i % side;

        let x = bounds.min.x + size.x * (col as f32 + 0.5) / side as f32;
        let z = bounds.min.z + size.z * (row as f32 + 0.5) / side as f32;
        let y = center_y + (rng.random::<f32>() - 0.5) * params.node_spacing;

        node.position = Some(bounds.clamp(Vec3::new(x, y, z)));
    }
}

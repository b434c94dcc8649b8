//! Circular layout.
//!
//! Closed-form ring placement: node i of N sits at angle `2π·i/N` on a
//! circle in the horizontal plane, centered on the box centroid, with the
//! vertical coordinate randomized in a narrow band for visual separation.

use rand::Rng;
use std::f32::consts::TAU;

use crate::geometry::{BoundingBox, Vec3};
use crate::graph::Node;

/// Ring radius as a fraction of the smaller horizontal half-extent.
const RADIUS_FACTOR: f32 = 0.8;

/// Fraction of the box height used for vertical jitter.
const HEIGHT_JITTER: f32 = 0.2;

pub fn apply<R: Rng>(nodes: &mut [Node], bounds: &BoundingBox, rng: &mut R) {
    let count = nodes.len();
    if count == 0 {
        return;
    }

    let center = bounds.center();
    let size = bounds.size();
    let radius = RADIUS_FACTOR * (size.x * 0.5).min(size.z * 0.5);

    for (i, node) in nodes.iter_mut().enumerate() {
        let angle = TAU * i as f32 / count as f32;
        let y = center.y + (rng.random::<f32>() - 0.5) * HEIGHT_JITTER * size.y;
        node.position = Some(Vec3::new(
            center.x + radius * angle.cos(),
            y,
            center.z + radius * angle.sin(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(3)
    }

    #[test]
    fn test_nodes_sit_on_the_ring() {
        let mut nodes: Vec<Node> = (0..12).map(|i| Node::new(format!("n{i}"))).collect();
        let bounds = BoundingBox::centered(50.0);

        apply(&mut nodes, &bounds, &mut rng());

        let center = bounds.center();
        let expected = 0.8 * 50.0;
        for node in &nodes {
            let distance = center.horizontal_distance(node.pos());
            assert!(
                (distance - expected).abs() < 1e-3,
                "{} sits {distance} from center, expected {expected}",
                node.id
            );
        }
    }

    #[test]
    fn test_radius_uses_smaller_horizontal_extent() {
        // Narrow in z: the ring must shrink to fit the z extent
        let bounds = BoundingBox::new(Vec3::new(-100.0, -10.0, -20.0), Vec3::new(100.0, 10.0, 20.0));
        let mut nodes: Vec<Node> = (0..8).map(|i| Node::new(format!("n{i}"))).collect();

        apply(&mut nodes, &bounds, &mut rng());

        let expected = 0.8 * 20.0;
        for node in &nodes {
            let distance = bounds.center().horizontal_distance(node.pos());
            assert!((distance - expected).abs() < 1e-3);
            assert!(bounds.contains(node.pos()));
        }
    }

    #[test]
    fn test_vertical_jitter_band() {
        let mut nodes: Vec<Node> = (0..50).map(|i| Node::new(format!("n{i}"))).collect();
        let bounds = BoundingBox::centered(50.0);

        apply(&mut nodes, &bounds, &mut rng());

        let half_band = HEIGHT_JITTER * bounds.size().y * 0.5;
        for node in &nodes {
            assert!((node.pos().y - bounds.center().y).abs() <= half_band);
        }
    }

    #[test]
    fn test_single_node() {
        let mut nodes = vec![Node::new("only")];
        let bounds = BoundingBox::centered(10.0);

        apply(&mut nodes, &bounds, &mut rng());

        // Angle 0: the lone node sits on the +x side of the ring
        let p = nodes[0].pos();
        assert!((p.x - 8.0).abs() < 1e-3);
        assert!((p.z - 0.0).abs() < 1e-3);
    }
}

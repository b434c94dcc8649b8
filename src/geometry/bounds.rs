//! Axis-aligned bounding box constraining layout output.

use serde::{Deserialize, Serialize};

use super::Vec3;
use crate::error::LayoutError;
use crate::graph::Node;

/// An axis-aligned 3D box given by its minimum and maximum corners.
///
/// Every layout algorithm guarantees that final node positions lie within
/// the box componentwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// A box centered on the origin with the given half-extent on all axes.
    pub fn centered(half_extent: f32) -> Self {
        Self {
            min: Vec3::new(-half_extent, -half_extent, -half_extent),
            max: Vec3::new(half_extent, half_extent, half_extent),
        }
    }

    /// Check that `min <= max` on every axis.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.min.x > self.max.x {
            return Err(LayoutError::DegenerateBounds { axis: 'x' });
        }
        if self.min.y > self.max.y {
            return Err(LayoutError::DegenerateBounds { axis: 'y' });
        }
        if self.min.z > self.max.z {
            return Err(LayoutError::DegenerateBounds { axis: 'z' });
        }
        Ok(())
    }

    /// Edge lengths of the box.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Geometric center of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether a point lies within the box componentwise.
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Clamp a point into the box componentwise.
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Tight box around every positioned node, or `None` if no node has a
    /// position yet.
    pub fn around_nodes(nodes: &[Node]) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for node in nodes {
            let Some(p) = node.position else { continue };
            match &mut bounds {
                None => {
                    bounds = Some(Self { min: p, max: p });
                }
                Some(b) => {
                    b.min.x = b.min.x.min(p.x);
                    b.min.y = b.min.y.min(p.y);
                    b.min.z = b.min.z.min(p.z);
                    b.max.x = b.max.x.max(p.x);
                    b.max.y = b.max.y.max(p.y);
                    b.max.z = b.max.z.max(p.z);
                }
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed() {
        let bounds = BoundingBox::centered(50.0);
        assert!(bounds.validate().is_ok());

        // Zero-volume boxes are degenerate but not inverted
        let flat = BoundingBox::new(Vec3::ZERO, Vec3::ZERO);
        assert!(flat.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let bounds = BoundingBox::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(5.0, 0.0, 5.0));
        let err = bounds.validate().unwrap_err();
        assert!(err.to_string().contains("y axis"));
    }

    #[test]
    fn test_clamp_and_contains() {
        let bounds = BoundingBox::centered(10.0);

        let inside = Vec3::new(1.0, -2.0, 3.0);
        assert!(bounds.contains(inside));
        assert_eq!(bounds.clamp(inside), inside);

        let outside = Vec3::new(100.0, 0.0, -100.0);
        assert!(!bounds.contains(outside));
        let clamped = bounds.clamp(outside);
        assert_eq!(clamped, Vec3::new(10.0, 0.0, -10.0));
        assert!(bounds.contains(clamped));
    }

    #[test]
    fn test_around_nodes() {
        let mut a = Node::new("a");
        a.position = Some(Vec3::new(-10.0, 5.0, 0.0));
        let mut b = Node::new("b");
        b.position = Some(Vec3::new(10.0, -5.0, 2.0));
        let c = Node::new("c"); // no position, skipped

        let bounds = BoundingBox::around_nodes(&[a, b, c]).unwrap();
        assert_eq!(bounds.min, Vec3::new(-10.0, -5.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(10.0, 5.0, 2.0));

        assert!(BoundingBox::around_nodes(&[Node::new("x")]).is_none());
    }
}

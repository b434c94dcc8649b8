//! Geometry primitives for 3D layout.
//!
//! The coordinate convention follows the consuming Three.js scene: Y is the
//! vertical axis, X and Z span the horizontal plane. Crossing detection and
//! the circular/grid layouts operate on the horizontal (x, z) projection.

mod bounds;
mod vec3;

pub use bounds::BoundingBox;
pub use vec3::Vec3;

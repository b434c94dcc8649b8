//! Error type for the layout engine.
//!
//! The engine degrades silently on graph-structural anomalies (dangling
//! edges, cycles, coincident nodes); only genuinely invalid caller input
//! is reported as an error.

/// Errors produced by layout entry points.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The bounding box has `min > max` on the named axis.
    #[error("bounding box is inverted on the {axis} axis (min > max)")]
    DegenerateBounds { axis: char },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

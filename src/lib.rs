//! Depgraph Layout - WASM Module
//!
//! The layout engine for a 3D dependency-graph visualization. Given a node
//! set, an edge set, an algorithm selection, and a bounding box, the engine
//! assigns every node a position inside the box; a crossing-minimization
//! pass can then refine the result. The module is compiled to WebAssembly
//! and exposes a JavaScript-friendly API via wasm-bindgen; the renderer
//! consuming the positions lives entirely on the JS side.
//!
//! # Architecture
//!
//! - `geometry`: 3D vector and bounding-box primitives
//! - `graph`: node/edge records and the petgraph-backed topology index
//! - `layout`: the five layout algorithms and the crossing optimizer
//! - `error`: the single validation error surfaced to callers

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;

pub use error::LayoutError;
pub use geometry::{BoundingBox, Vec3};
pub use graph::{Edge, Node};
pub use layout::{
    LayoutAlgorithm, LayoutParams, apply_layout, crossing_cost, crossing_count, optimize_layout,
};

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log!("depgraph layout engine initialized");
}

/// Main entry point for JavaScript callers.
///
/// Wraps the layout core together with a seedable random source so that
/// runs are reproducible: construct with [`with_seed`](Self::with_seed)
/// to get identical output for identical input.
#[wasm_bindgen]
pub struct DepgraphLayout {
    rng: ChaCha8Rng,
}

#[wasm_bindgen]
impl DepgraphLayout {
    /// Create an engine seeded from the current time.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(js_sys::Date::now().to_bits()),
        }
    }

    /// Create an engine with a fixed seed for deterministic layouts.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Run a layout algorithm over the supplied graph.
    ///
    /// `nodes` and `edges` are arrays of `{id, position?, size?, metadata?}`
    /// and `{source, target, weight?, kind?}` objects; `algorithm` is one of
    /// `"force-directed" | "hierarchical" | "circular" | "tree" | "grid"`;
    /// `params` may be a partial object. Returns the node array with every
    /// position assigned. Dangling edges are skipped; an inverted bounding
    /// box is an error.
    #[wasm_bindgen(js_name = applyLayout)]
    pub fn apply_layout(
        &mut self,
        nodes: JsValue,
        edges: JsValue,
        algorithm: JsValue,
        params: JsValue,
        bounds: JsValue,
    ) -> Result<JsValue, JsError> {
        let mut nodes: Vec<Node> = serde_wasm_bindgen::from_value(nodes)?;
        let edges: Vec<Edge> = serde_wasm_bindgen::from_value(edges)?;
        let algorithm: LayoutAlgorithm = serde_wasm_bindgen::from_value(algorithm)?;
        let params: LayoutParams = serde_wasm_bindgen::from_value(params)?;
        let bounds: BoundingBox = serde_wasm_bindgen::from_value(bounds)?;

        layout::apply_layout(&mut nodes, &edges, algorithm, &params, &bounds, &mut self.rng)?;

        Ok(serde_wasm_bindgen::to_value(&nodes)?)
    }

    /// Refine an existing layout by crossing-minimizing local search.
    ///
    /// Returns the node array with updated positions. The crossing cost of
    /// the result is never greater than that of the input.
    #[wasm_bindgen(js_name = optimizeLayout)]
    pub fn optimize_layout(
        &mut self,
        nodes: JsValue,
        edges: JsValue,
        params: JsValue,
    ) -> Result<JsValue, JsError> {
        let mut nodes: Vec<Node> = serde_wasm_bindgen::from_value(nodes)?;
        let edges: Vec<Edge> = serde_wasm_bindgen::from_value(edges)?;
        let params: LayoutParams = serde_wasm_bindgen::from_value(params)?;

        layout::optimize_layout(&mut nodes, &edges, &params, &mut self.rng);

        Ok(serde_wasm_bindgen::to_value(&nodes)?)
    }

    /// Number of edge pairs whose horizontal projections cross.
    #[wasm_bindgen(js_name = countCrossings)]
    pub fn count_crossings(&self, nodes: JsValue, edges: JsValue) -> Result<u32, JsError> {
        let nodes: Vec<Node> = serde_wasm_bindgen::from_value(nodes)?;
        let edges: Vec<Edge> = serde_wasm_bindgen::from_value(edges)?;
        Ok(layout::crossing_count(&nodes, &edges) as u32)
    }

    /// Weight-scaled crossing cost (the optimizer's objective).
    #[wasm_bindgen(js_name = crossingCost)]
    pub fn crossing_cost(&self, nodes: JsValue, edges: JsValue) -> Result<f32, JsError> {
        let nodes: Vec<Node> = serde_wasm_bindgen::from_value(nodes)?;
        let edges: Vec<Edge> = serde_wasm_bindgen::from_value(edges)?;
        Ok(layout::crossing_cost(&nodes, &edges))
    }

    /// Tight bounding box around every positioned node.
    ///
    /// Returns `[min_x, min_y, min_z, max_x, max_y, max_z]`, or `None`
    /// when no node has a position yet.
    #[wasm_bindgen(js_name = graphBounds)]
    pub fn graph_bounds(&self, nodes: JsValue) -> Result<Option<Vec<f32>>, JsError> {
        let nodes: Vec<Node> = serde_wasm_bindgen::from_value(nodes)?;
        Ok(BoundingBox::around_nodes(&nodes).map(|b| {
            vec![b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z]
        }))
    }
}

impl Default for DepgraphLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// A small dependency graph shaped like real generator output: one
    /// entry module fanning out to a few internals with cross imports.
    fn sample_graph() -> (Vec<Node>, Vec<Edge>) {
        let nodes = vec![
            Node::new("app"),
            Node::new("router"),
            Node::new("store"),
            Node::new("api"),
            Node::new("utils"),
        ];
        let edges = vec![
            Edge::new("app", "router", 1.0),
            Edge::new("app", "store", 0.8),
            Edge::new("router", "api", 0.6),
            Edge::new("store", "api", 0.6),
            Edge::new("api", "utils", 0.3),
            Edge::new("router", "utils", 0.3),
        ];
        (nodes, edges)
    }

    #[test]
    fn test_full_pipeline_layout_then_optimize() {
        let (mut nodes, edges) = sample_graph();
        let bounds = BoundingBox::centered(60.0);
        let params = LayoutParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        apply_layout(
            &mut nodes,
            &edges,
            LayoutAlgorithm::ForceDirected,
            &params,
            &bounds,
            &mut rng,
        )
        .unwrap();

        for node in &nodes {
            let p = node.position.expect("every node positioned");
            assert!(bounds.contains(p));
        }

        let before = crossing_count(&nodes, &edges);
        optimize_layout(&mut nodes, &edges, &params, &mut rng);
        let after = crossing_count(&nodes, &edges);
        assert!(after <= before);
    }

    #[test]
    fn test_fixed_seed_reproduces_the_layout() {
        let bounds = BoundingBox::centered(60.0);
        let params = LayoutParams::default();

        let run = || {
            let (mut nodes, edges) = sample_graph();
            let mut rng = ChaCha8Rng::seed_from_u64(1234);
            apply_layout(
                &mut nodes,
                &edges,
                LayoutAlgorithm::ForceDirected,
                &params,
                &bounds,
                &mut rng,
            )
            .unwrap();
            nodes
        };

        let first = run();
        let second = run();
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn test_each_algorithm_covers_the_sample_graph() {
        let bounds = BoundingBox::centered(80.0);
        let params = LayoutParams::default();

        for algorithm in [
            LayoutAlgorithm::ForceDirected,
            LayoutAlgorithm::Hierarchical,
            LayoutAlgorithm::Circular,
            LayoutAlgorithm::Tree,
            LayoutAlgorithm::Grid,
        ] {
            let (mut nodes, edges) = sample_graph();
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            apply_layout(&mut nodes, &edges, algorithm, &params, &bounds, &mut rng).unwrap();

            assert_eq!(nodes.len(), 5, "{algorithm:?} must not change the node set");
            for node in &nodes {
                assert!(node.position.is_some(), "{algorithm:?} left {} unplaced", node.id);
            }
        }
    }

    #[test]
    fn test_opaque_fields_survive_the_pipeline() {
        let (mut nodes, edges) = sample_graph();
        nodes[0].size = 3.5;
        nodes[0].metadata = Some(serde_json::json!({"path": "src/app.ts"}));

        let bounds = BoundingBox::centered(50.0);
        let params = LayoutParams::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        apply_layout(
            &mut nodes,
            &edges,
            LayoutAlgorithm::Hierarchical,
            &params,
            &bounds,
            &mut rng,
        )
        .unwrap();
        optimize_layout(&mut nodes, &edges, &params, &mut rng);

        assert_eq!(nodes[0].size, 3.5);
        assert_eq!(
            nodes[0].metadata.as_ref().unwrap()["path"],
            "src/app.ts"
        );
    }

    #[test]
    fn test_graph_bounds_wrap_the_layout() {
        let (mut nodes, edges) = sample_graph();
        let bounds = BoundingBox::centered(30.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        apply_layout(
            &mut nodes,
            &edges,
            LayoutAlgorithm::Grid,
            &LayoutParams::default(),
            &bounds,
            &mut rng,
        )
        .unwrap();

        let tight = BoundingBox::around_nodes(&nodes).unwrap();
        assert!(tight.min.x >= bounds.min.x && tight.max.x <= bounds.max.x);
        assert!(tight.min.y >= bounds.min.y && tight.max.y <= bounds.max.y);
        assert!(tight.min.z >= bounds.min.z && tight.max.z <= bounds.max.z);
    }
}

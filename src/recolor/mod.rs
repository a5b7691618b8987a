//! # Recoloring search
//!
//! Given a graph with a proper coloring, find a new proper coloring from the
//! same palette in which every vertex changes color.
//!
//! ```rust
//! use graph_recolor::graph::{Graph, GraphDocument, VertexRecord};
//! use graph_recolor::recolor::{recolor, verify, Recoloring};
//!
//! let mut document = GraphDocument::new();
//! document.insert("1", VertexRecord::new("r", vec![2]));
//! document.insert("2", VertexRecord::new("g", vec![1]));
//! let before = Graph::build(&document).unwrap();
//!
//! match recolor(&before).unwrap() {
//!     Recoloring::Recolored(after) => verify(&before, &after).unwrap(),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod search;
pub mod verify;

pub use search::{
    DEFAULT_MAX_DEPTH, RecolorError, Recolorer, Recoloring, SearchLimits, SearchOutcome,
    SearchStats, recolor,
};
pub use verify::{Violation, verify};

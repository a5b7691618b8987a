//! # Graph model
//!
//! A graph is a dense set of vertices `1..=N`, each carrying one color from
//! the fixed palette `{r, g, b}` and a symmetric neighbor list. Graphs are
//! built once from a [`GraphDocument`] via [`Graph::build`] and never mutated
//! afterwards; searches work on an [`Assignment`] instead.
//!
//! ## Example
//!
//! ```rust
//! use graph_recolor::graph::*;
//!
//! let mut document = GraphDocument::new();
//! document.insert("1", VertexRecord::new("r", vec![2]));
//! document.insert("2", VertexRecord::new("g", vec![1]));
//!
//! let graph = Graph::build(&document).unwrap();
//! let one = VertexId::new(1).unwrap();
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.color_of(one).unwrap(), Color::Red);
//! assert!(graph.is_properly_colored());
//! ```

pub mod assignment;
pub mod core;
pub mod ids;
pub mod index_vec;
pub mod palette;
pub mod records;

pub use assignment::Assignment;
pub use self::core::{DiagnosticReport, Graph, MalformedGraphError, UnknownVertexError, Vertex};
pub use ids::VertexId;
pub use index_vec::{Idx, IndexVec};
pub use palette::{Color, ColorSet, PALETTE};
pub use records::{GraphDocument, VertexRecord};

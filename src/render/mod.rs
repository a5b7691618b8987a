//! Drawing graphs: Graphviz export, terminal tables and timed transitions.
//!
//! Nothing here is needed by the search; the binary wires a [`Renderer`] to
//! the before/after graphs.

pub mod animate;
pub mod dot;
pub mod text;

use thiserror::Error;

use crate::graph::Graph;

pub use animate::{Frame, Pacing, animate_transition, transition_frames};
pub use dot::{DotRenderer, to_dot, write_dot};
pub use text::TextRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot animate between graphs of {before} and {after} vertices")]
    ShapeMismatch { before: usize, after: usize },
}

/// Something that can display one graph at a time.
pub trait Renderer {
    fn render(&mut self, graph: &Graph, title: &str) -> Result<(), RenderError>;
}

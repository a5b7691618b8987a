use std::io::Write;

use itertools::Itertools;

use crate::graph::Graph;
use crate::render::{RenderError, Renderer};

/// Prints an id / color / neighbors table.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, graph: &Graph, title: &str) -> Result<(), RenderError> {
        writeln!(self.out, "== {} ({} vertices)", title, graph.vertex_count())?;
        for (id, vertex) in graph.vertices() {
            writeln!(
                self.out,
                "{:>4}  {:<5}  [{}]",
                id,
                vertex.color.name(),
                vertex.neighbors.iter().join(", ")
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

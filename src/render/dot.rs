use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};

use crate::graph::Graph;
use crate::render::{RenderError, Renderer};

/// Undirected Graphviz source with vertices on a circle, filled by color.
pub fn to_dot(graph: &Graph, name: &str) -> String {
    let mut dot = String::new();
    let _ = writeln!(&mut dot, "graph \"{}\" {{", escape_label(name));
    let _ = writeln!(&mut dot, "    layout=circo;");
    let _ = writeln!(&mut dot, "    node [shape=circle, style=filled, fontname=\"Helvetica\"];");

    for (id, vertex) in graph.vertices() {
        let _ = writeln!(
            &mut dot,
            "    v{} [label=\"{}\", fillcolor=\"{}\"];",
            id,
            id,
            vertex.color.name()
        );
    }

    for (a, b) in graph.edges() {
        let _ = writeln!(&mut dot, "    v{} -- v{};", a, b);
    }

    let _ = writeln!(&mut dot, "}}");
    dot
}

pub fn write_dot<P: AsRef<Path>>(path: P, graph: &Graph, name: &str) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_dot(graph, name))
}

fn escape_label(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Writes every rendered graph to `<dir>/<NNN>_<title>.dot`.
#[derive(Debug)]
pub struct DotRenderer {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DotRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Renderer for DotRenderer {
    fn render(&mut self, graph: &Graph, title: &str) -> Result<(), RenderError> {
        let stem: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let path = self
            .dir
            .join(format!("{:03}_{}.dot", self.written.len(), stem));
        write_dot(&path, graph, title)?;
        log::debug!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

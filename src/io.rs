//! Reading and writing graphs in the JSON record format.
//!
//! ```json
//! {"1": {"color": "b", "edge_with": [2]}, "2": {"color": "r", "edge_with": [1]}}
//! ```
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::graph::{Graph, GraphDocument, MalformedGraphError};

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("the file {} is not a JSON file", .0.display())]
    NotJson(PathBuf),
    #[error("malformed graph: {0}")]
    Malformed(#[from] MalformedGraphError),
}

pub fn to_json_string<T>(value: &T) -> Result<String, IoError>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json_str<T>(s: &str) -> Result<T, IoError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    let content = to_json_string(value)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Rejects paths whose extension is not `.json` (case-insensitive).
pub fn ensure_json_path(path: &Path) -> Result<(), IoError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(())
    } else {
        Err(IoError::NotJson(path.to_path_buf()))
    }
}

pub fn read_document<P: AsRef<Path>>(path: P) -> Result<GraphDocument, IoError> {
    let path = path.as_ref();
    ensure_json_path(path)?;
    let mut file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Io(err),
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    from_json_str(&content)
}

/// Loads and validates a graph file.
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, IoError> {
    let document = read_document(path)?;
    Ok(Graph::build(&document)?)
}

pub fn parse_graph(s: &str) -> Result<Graph, IoError> {
    let document: GraphDocument = from_json_str(s)?;
    Ok(Graph::build(&document)?)
}

pub fn graph_to_json(graph: &Graph) -> Result<String, IoError> {
    to_json_string(&graph.to_document())
}

pub fn write_graph<P: AsRef<Path>>(path: P, graph: &Graph) -> Result<(), IoError> {
    write_json(path, &graph.to_document())
}

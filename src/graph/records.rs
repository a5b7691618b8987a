//! Loosely typed records exactly as they appear in a graph file.
//!
//! Nothing here is validated; [`Graph::build`](crate::graph::Graph::build)
//! turns a [`GraphDocument`] into the typed model.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub color: String,
    pub edge_with: Vec<u32>,
}

impl VertexRecord {
    pub fn new(color: impl Into<String>, edge_with: impl Into<Vec<u32>>) -> Self {
        Self {
            color: color.into(),
            edge_with: edge_with.into(),
        }
    }
}

/// Vertex id (as text) to record, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphDocument(pub IndexMap<String, VertexRecord>);

impl GraphDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, record: VertexRecord) -> Option<VertexRecord> {
        self.0.insert(id.into(), record)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VertexRecord)> {
        self.0.iter()
    }
}

impl FromIterator<(String, VertexRecord)> for GraphDocument {
    fn from_iter<I: IntoIterator<Item = (String, VertexRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

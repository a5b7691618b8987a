//! Validated graph model: vertices, their colors and adjacency.
use std::collections::BTreeSet;

use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use smallvec::SmallVec;
use thiserror::Error;

use crate::graph::assignment::Assignment;
use crate::graph::ids::VertexId;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::palette::Color;
use crate::graph::records::{GraphDocument, VertexRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGraphError {
    #[error("vertex key {0:?} is not a plain decimal integer")]
    NonNumericId(String),
    #[error("vertex id 0 is not allowed, ids start at 1")]
    ZeroId,
    #[error("vertex id {id} is outside 1..={count}, ids must be contiguous")]
    NonContiguous { id: u32, count: usize },
    #[error("vertex {vertex} has unknown color code {code:?}")]
    InvalidColor { vertex: VertexId, code: String },
    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { vertex: VertexId, neighbor: u32 },
    #[error("vertex {0} lists itself as a neighbor")]
    SelfLoop(VertexId),
    #[error("edge {from} -> {to} is not declared by vertex {to}")]
    AsymmetricEdge { from: VertexId, to: VertexId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex {id} does not exist in a graph of {count} vertices")]
pub struct UnknownVertexError {
    pub id: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub color: Color,
    /// Neighbors in the order the input declared them.
    pub neighbors: SmallVec<[VertexId; 4]>,
}

impl Vertex {
    pub fn is_adjacent(&self, other: VertexId) -> bool {
        self.neighbors.contains(&other)
    }
}

/// Findings about an input graph that do not make it malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Adjacent pairs that already share a color.
    pub conflicts: Vec<(VertexId, VertexId)>,
    pub isolated: Vec<VertexId>,
    pub components: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
}

impl DiagnosticReport {
    pub fn has_issues(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: IndexVec<VertexId, Vertex>,
}

impl Graph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates `document` and builds the typed graph.
    ///
    /// Ids must be exactly `1..=N`, every color must be a palette code and
    /// every edge must be declared from both ends.
    pub fn build(document: &GraphDocument) -> Result<Self, MalformedGraphError> {
        let count = document.len();
        let mut slots: Vec<Option<&VertexRecord>> = vec![None; count];

        for (key, record) in document.iter() {
            let raw = parse_key(key)?;
            let id = VertexId::new(raw).ok_or(MalformedGraphError::ZeroId)?;
            let slot = slots
                .get_mut(id.index())
                .ok_or(MalformedGraphError::NonContiguous { id: raw, count })?;
            *slot = Some(record);
        }

        let mut vertices = IndexVec::with_capacity(count);
        for (idx, slot) in slots.into_iter().enumerate() {
            let id = VertexId::from_usize(idx);
            let record = slot.ok_or(MalformedGraphError::NonContiguous {
                id: id.raw(),
                count,
            })?;
            let color =
                Color::from_code(&record.color).ok_or_else(|| MalformedGraphError::InvalidColor {
                    vertex: id,
                    code: record.color.clone(),
                })?;
            let neighbors = record
                .edge_with
                .iter()
                .map(|&raw| match VertexId::new(raw) {
                    Some(n) if n == id => Err(MalformedGraphError::SelfLoop(id)),
                    Some(n) if n.index() < count => Ok(n),
                    _ => Err(MalformedGraphError::UnknownNeighbor {
                        vertex: id,
                        neighbor: raw,
                    }),
                })
                .collect::<Result<SmallVec<_>, _>>()?;
            vertices.push(Vertex { color, neighbors });
        }

        for (id, vertex) in vertices.iter_enumerated() {
            for &neighbor in &vertex.neighbors {
                if !vertices[neighbor].is_adjacent(id) {
                    return Err(MalformedGraphError::AsymmetricEdge {
                        from: id,
                        to: neighbor,
                    });
                }
            }
        }

        Ok(Self { vertices })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn last_vertex(&self) -> Option<VertexId> {
        self.vertices.last_id()
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex, UnknownVertexError> {
        self.vertices.get(id).ok_or(UnknownVertexError {
            id: id.raw(),
            count: self.vertex_count(),
        })
    }

    pub(crate) fn node(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub fn color_of(&self, id: VertexId) -> Result<Color, UnknownVertexError> {
        self.vertex(id).map(|v| v.color)
    }

    pub fn neighbors_of(&self, id: VertexId) -> Result<&[VertexId], UnknownVertexError> {
        self.vertex(id).map(|v| v.neighbors.as_slice())
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + use<> {
        self.vertices.ids()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter_enumerated()
    }

    /// Each undirected edge once, as `(lower, higher)`, in ascending order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let set: BTreeSet<_> = self
            .vertices()
            .flat_map(|(id, v)| {
                v.neighbors
                    .iter()
                    .filter(move |&&n| n > id)
                    .map(move |&n| (id, n))
            })
            .collect();
        set.into_iter().collect()
    }

    /// Adjacent pairs sharing a color.
    pub fn conflicts(&self) -> Vec<(VertexId, VertexId)> {
        self.edges()
            .into_iter()
            .filter(|&(a, b)| self.vertices[a].color == self.vertices[b].color)
            .collect()
    }

    pub fn is_properly_colored(&self) -> bool {
        self.conflicts().is_empty()
    }

    /// Fresh scratch space for a search over this graph.
    pub fn working_copy(&self) -> Assignment {
        Assignment::unassigned(self.vertex_count())
    }

    /// Same structure, new colors.
    pub(crate) fn with_colors(&self, colors: &IndexVec<VertexId, Color>) -> Self {
        let vertices = self
            .vertices()
            .map(|(id, v)| Vertex {
                color: colors[id],
                neighbors: v.neighbors.clone(),
            })
            .collect();
        Self { vertices }
    }

    /// Same structure, with `vertex` painted `color`.
    pub fn with_vertex_color(
        &self,
        vertex: VertexId,
        color: Color,
    ) -> Result<Self, UnknownVertexError> {
        self.vertex(vertex)?;
        let mut graph = self.clone();
        graph.vertices[vertex].color = color;
        Ok(graph)
    }

    pub fn to_document(&self) -> GraphDocument {
        self.vertices()
            .map(|(id, v)| {
                let edge_with: Vec<u32> = v.neighbors.iter().map(|n| n.raw()).collect();
                (id.to_string(), VertexRecord::new(v.color.code(), edge_with))
            })
            .collect()
    }

    pub fn to_petgraph(&self) -> UnGraph<VertexId, ()> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), 0);
        let nodes: Vec<_> = self.ids().map(|id| graph.add_node(id)).collect();
        for (a, b) in self.edges() {
            graph.add_edge(nodes[a.index()], nodes[b.index()], ());
        }
        graph
    }

    pub fn diagnose(&self) -> DiagnosticReport {
        let isolated = self
            .vertices()
            .filter(|(_, v)| v.neighbors.is_empty())
            .map(|(id, _)| id)
            .collect();
        DiagnosticReport {
            conflicts: self.conflicts(),
            isolated,
            components: connected_components(&self.to_petgraph()),
            vertex_count: self.vertex_count(),
            edge_count: self.edges().len(),
        }
    }
}

/// Keys are written back with `to_string`, so only that form is accepted:
/// ASCII digits, no sign, no leading zero.
fn parse_key(key: &str) -> Result<u32, MalformedGraphError> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    canonical
        .then(|| key.parse().ok())
        .flatten()
        .ok_or_else(|| MalformedGraphError::NonNumericId(key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> VertexId {
        VertexId::new(raw).unwrap()
    }

    fn doc(entries: &[(&str, &str, &[u32])]) -> GraphDocument {
        entries
            .iter()
            .map(|(k, c, e)| (k.to_string(), VertexRecord::new(*c, e.to_vec())))
            .collect()
    }

    fn sample() -> GraphDocument {
        doc(&[
            ("1", "b", &[2, 3, 4]),
            ("2", "b", &[1, 4]),
            ("3", "g", &[1]),
            ("4", "r", &[1, 2]),
        ])
    }

    #[test]
    fn builds_sample_graph() {
        let graph = Graph::build(&sample()).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.color_of(id(3)), Ok(Color::Green));
        assert_eq!(graph.neighbors_of(id(1)).unwrap(), &[id(2), id(3), id(4)]);
        assert_eq!(
            graph.edges(),
            vec![(id(1), id(2)), (id(1), id(3)), (id(1), id(4)), (id(2), id(4))]
        );
    }

    #[test]
    fn accessors_reject_unknown_vertex() {
        let graph = Graph::build(&sample()).unwrap();
        let err = graph.color_of(id(5)).unwrap_err();
        assert_eq!(err, UnknownVertexError { id: 5, count: 4 });
        assert!(graph.neighbors_of(id(9)).is_err());
    }

    #[test]
    fn keys_may_appear_in_any_order() {
        let graph = Graph::build(&doc(&[("2", "r", &[1]), ("1", "g", &[2])])).unwrap();
        assert_eq!(graph.color_of(id(1)), Ok(Color::Green));
        assert_eq!(graph.to_document().iter().next().unwrap().0, "1");
    }

    #[test]
    fn rejects_gaps_in_ids() {
        let err = Graph::build(&doc(&[("1", "r", &[]), ("3", "g", &[])])).unwrap_err();
        assert_eq!(err, MalformedGraphError::NonContiguous { id: 3, count: 2 });
    }

    #[test]
    fn rejects_bad_keys() {
        let err = Graph::build(&doc(&[("a", "r", &[])])).unwrap_err();
        assert_eq!(err, MalformedGraphError::NonNumericId("a".into()));

        let err = Graph::build(&doc(&[("0", "r", &[])])).unwrap_err();
        assert_eq!(err, MalformedGraphError::ZeroId);

        let err = Graph::build(&doc(&[("1", "r", &[]), ("01", "g", &[])])).unwrap_err();
        assert_eq!(err, MalformedGraphError::NonNumericId("01".into()));
    }

    #[test]
    fn rejects_keys_that_would_not_round_trip() {
        for key in ["+1", "01", " 1", "1 ", "", "1e0", "-1"] {
            let err = Graph::build(&doc(&[(key, "r", &[])])).unwrap_err();
            assert_eq!(err, MalformedGraphError::NonNumericId(key.into()), "key {key:?}");
        }

        let document = doc(&[("1", "r", &[2]), ("2", "g", &[1])]);
        let graph = Graph::build(&document).unwrap();
        assert_eq!(graph.to_document(), document);
    }

    #[test]
    fn rejects_unknown_color() {
        let err = Graph::build(&doc(&[("1", "y", &[])])).unwrap_err();
        assert_eq!(
            err,
            MalformedGraphError::InvalidColor {
                vertex: id(1),
                code: "y".into()
            }
        );
    }

    #[test]
    fn rejects_unknown_neighbor_and_self_loop() {
        let err = Graph::build(&doc(&[("1", "r", &[2])])).unwrap_err();
        assert_eq!(
            err,
            MalformedGraphError::UnknownNeighbor {
                vertex: id(1),
                neighbor: 2
            }
        );

        let err = Graph::build(&doc(&[("1", "r", &[1])])).unwrap_err();
        assert_eq!(err, MalformedGraphError::SelfLoop(id(1)));
    }

    #[test]
    fn rejects_one_directional_edge() {
        let err = Graph::build(&doc(&[("1", "r", &[2]), ("2", "g", &[])])).unwrap_err();
        assert_eq!(
            err,
            MalformedGraphError::AsymmetricEdge {
                from: id(1),
                to: id(2)
            }
        );
    }

    #[test]
    fn document_round_trip_is_exact() {
        let document = sample();
        let graph = Graph::build(&document).unwrap();
        assert_eq!(graph.to_document(), document);
    }

    #[test]
    fn diagnose_reports_conflicts_and_components() {
        let graph = Graph::build(&doc(&[
            ("1", "r", &[2]),
            ("2", "r", &[1]),
            ("3", "g", &[]),
        ]))
        .unwrap();
        let report = graph.diagnose();
        assert_eq!(report.conflicts, vec![(id(1), id(2))]);
        assert_eq!(report.isolated, vec![id(3)]);
        assert_eq!(report.components, 2);
        assert_eq!(report.edge_count, 1);
        assert!(report.has_issues());
        assert!(!graph.is_properly_colored());
    }

    #[test]
    fn working_copy_is_blank() {
        let graph = Graph::build(&sample()).unwrap();
        let scratch = graph.working_copy();
        assert_eq!(scratch.len(), 4);
        assert_eq!(scratch.assigned_count(), 0);
    }

    #[test]
    fn empty_document_builds_empty_graph() {
        let graph = Graph::build(&GraphDocument::new()).unwrap();
        assert!(graph.is_empty());
        assert!(graph.last_vertex().is_none());
        assert_eq!(graph.diagnose().components, 0);
    }
}

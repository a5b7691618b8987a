//! Independent check of a recoloring against the graph it came from.
use thiserror::Error;

use crate::graph::{Color, Graph, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("vertex counts differ: {before} before, {after} after")]
    VertexCount { before: usize, after: usize },
    #[error("neighbors of vertex {0} changed")]
    Adjacency(VertexId),
    #[error("vertex {vertex} kept its color {color}")]
    KeptColor { vertex: VertexId, color: Color },
    #[error("adjacent vertices {a} and {b} are both {color}")]
    Conflict { a: VertexId, b: VertexId, color: Color },
}

/// Returns the first violation found, scanning vertices in id order.
pub fn verify(before: &Graph, after: &Graph) -> Result<(), Violation> {
    if before.vertex_count() != after.vertex_count() {
        return Err(Violation::VertexCount {
            before: before.vertex_count(),
            after: after.vertex_count(),
        });
    }

    for ((id, old), (_, new)) in before.vertices().zip(after.vertices()) {
        if old.neighbors != new.neighbors {
            return Err(Violation::Adjacency(id));
        }
        if old.color == new.color {
            return Err(Violation::KeptColor {
                vertex: id,
                color: new.color,
            });
        }
    }

    match after.conflicts().first() {
        Some(&(a, b)) => Err(Violation::Conflict {
            a,
            b,
            color: after.node(a).color,
        }),
        None => Ok(()),
    }
}

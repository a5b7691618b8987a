//! Scratch color assignment owned by a single search.
use crate::graph::ids::VertexId;
use crate::graph::index_vec::IndexVec;
use crate::graph::palette::Color;

/// One slot per vertex, `None` while unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: IndexVec<VertexId, Option<Color>>,
}

impl Assignment {
    pub fn unassigned(vertex_count: usize) -> Self {
        Self {
            slots: IndexVec::from_elem(None, vertex_count),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, vertex: VertexId) -> Option<Color> {
        self.slots.get(vertex).copied().flatten()
    }

    pub fn is_assigned(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some()
    }

    pub fn assign(&mut self, vertex: VertexId, color: Color) {
        self.slots[vertex] = Some(color);
    }

    pub fn clear(&mut self, vertex: VertexId) {
        self.slots[vertex] = None;
    }

    /// The highest-numbered vertex carries a color.
    ///
    /// Vertices are filled in id order, so this is the completion test the
    /// search uses after each recursive step.
    pub fn last_is_assigned(&self) -> bool {
        self.slots
            .last_id()
            .is_some_and(|last| self.is_assigned(last))
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Converts into concrete colors, or `None` if any slot is still open.
    pub fn into_colors(self) -> Option<IndexVec<VertexId, Color>> {
        self.slots.iter().copied().collect()
    }
}

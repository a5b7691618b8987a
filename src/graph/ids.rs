use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::index_vec::Idx;

/// Vertex identifier as it appears in the persisted format.
///
/// Ids are dense and one-based, so the slot in an [`IndexVec`] is `raw - 1`.
///
/// [`IndexVec`]: crate::graph::index_vec::IndexVec
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Returns `None` for `0`, which is never a valid vertex id.
    pub const fn new(raw: u32) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId")?;
        f.debug_tuple("").field(&self.0).finish()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Idx for VertexId {
    fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    fn from_usize(idx: usize) -> Self {
        Self(idx as u32 + 1)
    }
}

//! Step-by-step transition between two colorings of the same graph.
use std::thread;
use std::time::Duration;

use crate::graph::{Graph, VertexId};
use crate::render::{RenderError, Renderer};

const BASE_DELAY: Duration = Duration::from_millis(600);
const MIN_DELAY: Duration = Duration::from_millis(40);

/// How long each frame stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub frame_delay: Duration,
}

impl Pacing {
    pub fn new(frame_delay: Duration) -> Self {
        Self { frame_delay }
    }

    /// Larger graphs get shorter frames so the whole transition stays short.
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        let divisor = u32::try_from(vertex_count.max(1)).unwrap_or(u32::MAX);
        Self::new((BASE_DELAY / divisor).max(MIN_DELAY))
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub graph: Graph,
    /// Vertex that switched color in this frame, `None` for the first one.
    pub changed: Option<VertexId>,
}

/// Frames from `before` to `after`, flipping one vertex per frame in id order.
///
/// Vertices whose color is the same in both graphs do not get a frame.
pub fn transition_frames(before: &Graph, after: &Graph) -> Result<Vec<Frame>, RenderError> {
    if before.vertex_count() != after.vertex_count() {
        return Err(RenderError::ShapeMismatch {
            before: before.vertex_count(),
            after: after.vertex_count(),
        });
    }

    let mut frames = vec![Frame {
        graph: before.clone(),
        changed: None,
    }];
    let mut current = before.clone();
    for ((id, old), (_, new)) in before.vertices().zip(after.vertices()) {
        if old.color == new.color {
            continue;
        }
        current = current
            .with_vertex_color(id, new.color)
            .map_err(|_| RenderError::ShapeMismatch {
                before: before.vertex_count(),
                after: after.vertex_count(),
            })?;
        frames.push(Frame {
            graph: current.clone(),
            changed: Some(id),
        });
    }
    Ok(frames)
}

/// Renders every transition frame, pausing `pacing.frame_delay` between them.
pub fn animate_transition<R: Renderer + ?Sized>(
    renderer: &mut R,
    before: &Graph,
    after: &Graph,
    pacing: Pacing,
) -> Result<usize, RenderError> {
    let frames = transition_frames(before, after)?;
    let total = frames.len();
    for (idx, frame) in frames.iter().enumerate() {
        let title = match frame.changed {
            Some(vertex) => format!("frame {}/{} vertex {}", idx, total - 1, vertex),
            None => format!("frame {}/{}", idx, total - 1),
        };
        renderer.render(&frame.graph, &title)?;
        if idx + 1 < total && !pacing.frame_delay.is_zero() {
            thread::sleep(pacing.frame_delay);
        }
    }
    Ok(total)
}

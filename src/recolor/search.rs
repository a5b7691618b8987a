//! Depth-first recoloring over vertices in id order.
//!
//! Vertex `v` may take any palette color except its original one and the
//! colors already placed on lower-numbered neighbors. Candidates are tried
//! in palette order; after each recursive step the search stops as soon as
//! the last vertex holds a color. A vertex whose candidates are exhausted is
//! reset to unassigned and control returns to `v - 1`.
//!
//! All attempts share one [`Assignment`]. Choices made by an abandoned
//! branch are overwritten by the next attempt rather than rolled back.
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::graph::{Assignment, ColorSet, Graph, Idx, VertexId};

/// Graphs above this size are refused unless the caller raises the limit.
///
/// Recursion depth equals the vertex count; this bound fits a default 2 MB
/// spawned-thread stack in an unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 2_000;

const CLOCK_CHECK_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: Option<usize>,
    /// Upper bound on candidate colors tried.
    pub max_steps: Option<u64>,
    pub time_limit: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            max_steps: None,
            time_limit: None,
        }
    }
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self {
            max_depth: None,
            max_steps: None,
            time_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecolorError {
    #[error("graph has {vertex_count} vertices, above the depth limit of {max_depth}")]
    DepthLimit {
        vertex_count: usize,
        max_depth: usize,
    },
    #[error("search gave up after {0} steps")]
    StepLimit(u64),
    #[error("search gave up after {0:?}")]
    TimeLimit(Duration),
}

/// Result of a finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recoloring {
    /// Every vertex got a new color, none shared with a neighbor.
    Recolored(Graph),
    /// No recoloring exists under the palette and prior-color constraints.
    Infeasible,
    /// The input had no vertices. Not a failure.
    Empty,
}

impl Recoloring {
    pub fn graph(&self) -> Option<&Graph> {
        match self {
            Recoloring::Recolored(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn is_recolored(&self) -> bool {
        matches!(self, Recoloring::Recolored(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate colors tried across all vertices.
    pub steps: u64,
    /// Visits that found no candidate at all.
    pub dead_ends: u64,
    pub deepest: Option<VertexId>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub recoloring: Recoloring,
    pub stats: SearchStats,
}

pub struct Recolorer<'g> {
    graph: &'g Graph,
    limits: SearchLimits,
}

impl<'g> Recolorer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn run(&self) -> Result<SearchOutcome, RecolorError> {
        let started = Instant::now();
        if self.graph.is_empty() {
            return Ok(SearchOutcome {
                recoloring: Recoloring::Empty,
                stats: SearchStats::default(),
            });
        }

        if let Some(max_depth) = self.limits.max_depth {
            let vertex_count = self.graph.vertex_count();
            if vertex_count > max_depth {
                return Err(RecolorError::DepthLimit {
                    vertex_count,
                    max_depth,
                });
            }
        }

        let mut search = Search {
            graph: self.graph,
            assignment: self.graph.working_copy(),
            limits: self.limits,
            stats: SearchStats::default(),
            started,
        };
        search.visit(VertexId::from_usize(0))?;

        let Search {
            assignment,
            mut stats,
            ..
        } = search;
        stats.elapsed = started.elapsed();

        let colors = assignment
            .last_is_assigned()
            .then(|| assignment.into_colors())
            .flatten();
        let recoloring = match colors {
            Some(colors) => Recoloring::Recolored(self.graph.with_colors(&colors)),
            None => Recoloring::Infeasible,
        };
        Ok(SearchOutcome { recoloring, stats })
    }
}

/// Runs a search with default limits.
pub fn recolor(graph: &Graph) -> Result<Recoloring, RecolorError> {
    Recolorer::new(graph).run().map(|outcome| outcome.recoloring)
}

struct Search<'g> {
    graph: &'g Graph,
    assignment: Assignment,
    limits: SearchLimits,
    stats: SearchStats,
    started: Instant,
}

impl Search<'_> {
    fn visit(&mut self, vertex: VertexId) -> Result<(), RecolorError> {
        if vertex.index() >= self.graph.vertex_count() {
            return Ok(());
        }
        if self.stats.deepest.is_none_or(|deepest| vertex > deepest) {
            self.stats.deepest = Some(vertex);
        }

        let candidates = self.candidates(vertex);
        if candidates.is_empty() {
            self.stats.dead_ends += 1;
        }

        for color in candidates.colors() {
            self.tick()?;
            self.assignment.assign(vertex, color);
            self.visit(vertex.next())?;
            if self.assignment.last_is_assigned() {
                return Ok(());
            }
        }

        self.assignment.clear(vertex);
        Ok(())
    }

    fn candidates(&self, vertex: VertexId) -> ColorSet {
        let node = self.graph.node(vertex);
        let mut set = ColorSet::palette().without(node.color);
        for &neighbor in node.neighbors.iter().filter(|&&n| n < vertex) {
            if let Some(color) = self.assignment.get(neighbor) {
                set.remove_color(color);
            }
        }
        set
    }

    fn tick(&mut self) -> Result<(), RecolorError> {
        self.stats.steps += 1;
        if let Some(max_steps) = self.limits.max_steps {
            if self.stats.steps > max_steps {
                return Err(RecolorError::StepLimit(max_steps));
            }
        }
        if let Some(limit) = self.limits.time_limit {
            if self.stats.steps % CLOCK_CHECK_INTERVAL == 0 && self.started.elapsed() > limit {
                return Err(RecolorError::TimeLimit(limit));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Color, GraphDocument, PALETTE, VertexRecord};
    use crate::recolor::verify;

    fn id(raw: u32) -> VertexId {
        VertexId::new(raw).unwrap()
    }

    fn graph(entries: &[(&str, &[u32])]) -> Graph {
        let document: GraphDocument = entries
            .iter()
            .enumerate()
            .map(|(i, (c, e))| ((i + 1).to_string(), VertexRecord::new(*c, e.to_vec())))
            .collect();
        Graph::build(&document).unwrap()
    }

    fn sample() -> Graph {
        graph(&[("b", &[2, 3, 4]), ("b", &[1, 4]), ("g", &[1]), ("r", &[1, 2])])
    }

    fn k4() -> Graph {
        graph(&[
            ("r", &[2, 3, 4]),
            ("g", &[1, 3, 4]),
            ("b", &[1, 2, 4]),
            ("r", &[1, 2, 3]),
        ])
    }

    fn colors(graph: &Graph) -> Vec<Color> {
        graph.vertices().map(|(_, v)| v.color).collect()
    }

    #[test]
    fn sample_graph_is_recolored() {
        let before = sample();
        let after = recolor(&before).unwrap();
        let after = after.graph().unwrap();

        verify(&before, after).unwrap();
        assert_eq!(
            colors(after),
            vec![Color::Red, Color::Green, Color::Blue, Color::Blue]
        );
        assert_eq!(after.edges(), before.edges());
    }

    #[test]
    fn complete_graph_on_four_vertices_is_infeasible() {
        let outcome = Recolorer::new(&k4()).run().unwrap();
        assert_eq!(outcome.recoloring, Recoloring::Infeasible);
        assert!(outcome.stats.dead_ends > 0);
    }

    #[test]
    fn empty_graph_is_not_infeasible() {
        let result = recolor(&Graph::empty()).unwrap();
        assert_eq!(result, Recoloring::Empty);
        assert!(!result.is_recolored());
    }

    #[test]
    fn single_vertex_takes_first_other_color() {
        let after = recolor(&graph(&[("r", &[])])).unwrap();
        assert_eq!(colors(after.graph().unwrap()), vec![Color::Blue]);

        let after = recolor(&graph(&[("b", &[])])).unwrap();
        assert_eq!(colors(after.graph().unwrap()), vec![Color::Red]);
    }

    #[test]
    fn dead_end_retries_at_parent() {
        // 1=b leaves 2 with {r, g}; 2=r would leave 3 with nothing.
        let before = graph(&[("r", &[2, 3]), ("b", &[1, 3]), ("g", &[1, 2])]);
        let outcome = Recolorer::new(&before).run().unwrap();
        let after = outcome.recoloring.graph().unwrap();

        assert_eq!(colors(after), vec![Color::Blue, Color::Green, Color::Red]);
        assert_eq!(outcome.stats.dead_ends, 1);
        assert_eq!(outcome.stats.steps, 4);
        assert_eq!(outcome.stats.deepest, Some(id(3)));
        verify(&before, after).unwrap();
    }

    #[test]
    fn search_is_deterministic() {
        let before = sample();
        let first = recolor(&before).unwrap();
        for _ in 0..5 {
            assert_eq!(recolor(&before).unwrap(), first);
        }
    }

    #[test]
    fn input_graph_is_untouched() {
        let before = sample();
        let snapshot = before.clone();
        let _ = recolor(&before).unwrap();
        assert_eq!(before, snapshot);
    }

    #[test]
    fn step_limit_is_reported() {
        let limits = SearchLimits {
            max_steps: Some(1),
            ..SearchLimits::default()
        };
        let err = Recolorer::new(&k4()).with_limits(limits).run().unwrap_err();
        assert_eq!(err, RecolorError::StepLimit(1));
    }

    #[test]
    fn depth_limit_refuses_large_graphs() {
        let limits = SearchLimits {
            max_depth: Some(3),
            ..SearchLimits::unlimited()
        };
        let err = Recolorer::new(&sample()).with_limits(limits).run().unwrap_err();
        assert_eq!(
            err,
            RecolorError::DepthLimit {
                vertex_count: 4,
                max_depth: 3
            }
        );
    }

    fn path(n: u32) -> Graph {
        let codes = ["r", "g", "b"];
        let document: GraphDocument = (1..=n)
            .map(|v| {
                let mut edges = Vec::new();
                if v > 1 {
                    edges.push(v - 1);
                }
                if v < n {
                    edges.push(v + 1);
                }
                (
                    v.to_string(),
                    VertexRecord::new(codes[(v as usize) % 3], edges),
                )
            })
            .collect();
        Graph::build(&document).unwrap()
    }

    #[test]
    fn long_path_is_recolored() {
        let before = path(200);
        let after = recolor(&before).unwrap();
        verify(&before, after.graph().unwrap()).unwrap();
    }

    #[test]
    fn default_depth_fits_test_thread_stack() {
        let before = path(DEFAULT_MAX_DEPTH as u32);
        let after = recolor(&before).unwrap();
        verify(&before, after.graph().unwrap()).unwrap();

        let err = recolor(&path(DEFAULT_MAX_DEPTH as u32 + 1)).unwrap_err();
        assert_eq!(
            err,
            RecolorError::DepthLimit {
                vertex_count: DEFAULT_MAX_DEPTH + 1,
                max_depth: DEFAULT_MAX_DEPTH
            }
        );
    }

    /// Whether any assignment changes every vertex and splits every edge.
    fn recolorable(original: &[Color], edges: &[(usize, usize)]) -> bool {
        let n = original.len();
        (0..3usize.pow(n as u32)).any(|mut code| {
            let colors: Vec<Color> = (0..n)
                .map(|_| {
                    let color = PALETTE[code % 3];
                    code /= 3;
                    color
                })
                .collect();
            colors.iter().zip(original).all(|(new, old)| new != old)
                && edges.iter().all(|&(a, b)| colors[a] != colors[b])
        })
    }

    #[test]
    fn matches_exhaustive_search_on_small_graphs() {
        for n in 1..=4usize {
            let pairs: Vec<(usize, usize)> = (0..n)
                .flat_map(|a| (a + 1..n).map(move |b| (a, b)))
                .collect();
            for mask in 0..1u32 << pairs.len() {
                let edges: Vec<_> = pairs
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, &edge)| edge)
                    .collect();
                for mut code in 0..3usize.pow(n as u32) {
                    let original: Vec<Color> = (0..n)
                        .map(|_| {
                            let color = PALETTE[code % 3];
                            code /= 3;
                            color
                        })
                        .collect();
                    let document: GraphDocument = (0..n)
                        .map(|v| {
                            let neighbors: Vec<u32> = edges
                                .iter()
                                .filter_map(|&(a, b)| {
                                    if v == a {
                                        Some(b as u32 + 1)
                                    } else if v == b {
                                        Some(a as u32 + 1)
                                    } else {
                                        None
                                    }
                                })
                                .collect();
                            (
                                (v + 1).to_string(),
                                VertexRecord::new(original[v].code(), neighbors),
                            )
                        })
                        .collect();
                    let before = Graph::build(&document).unwrap();

                    let result = recolor(&before).unwrap();
                    assert_eq!(
                        result.is_recolored(),
                        recolorable(&original, &edges),
                        "n={n} edges={edges:?} colors={original:?}"
                    );
                    if let Some(after) = result.graph() {
                        verify(&before, after).unwrap();
                    }
                }
            }
        }
    }
}

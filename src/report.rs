use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::graph::{DiagnosticReport, Graph, GraphDocument};
use crate::recolor::{Recoloring, SearchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Recolored,
    Infeasible,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub components: usize,
    /// Adjacent pairs already sharing a color in the input.
    pub conflicts: Vec<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecolorReport {
    pub source: String,
    pub outcome: OutcomeKind,
    pub input: InputInfo,
    pub steps: u64,
    pub dead_ends: u64,
    pub analysis_time: Duration,
    pub recolored: Option<GraphDocument>,
}

impl RecolorReport {
    pub fn new(source: impl Into<String>, before: &Graph, outcome: &SearchOutcome) -> Self {
        let DiagnosticReport {
            conflicts,
            components,
            vertex_count,
            edge_count,
            ..
        } = before.diagnose();
        let (kind, recolored) = match &outcome.recoloring {
            Recoloring::Recolored(after) => (OutcomeKind::Recolored, Some(after.to_document())),
            Recoloring::Infeasible => (OutcomeKind::Infeasible, None),
            Recoloring::Empty => (OutcomeKind::Empty, None),
        };
        Self {
            source: source.into(),
            outcome: kind,
            input: InputInfo {
                vertex_count,
                edge_count,
                components,
                conflicts: conflicts
                    .into_iter()
                    .map(|(a, b)| (a.raw(), b.raw()))
                    .collect(),
            },
            steps: outcome.stats.steps,
            dead_ends: outcome.stats.dead_ends,
            analysis_time: outcome.stats.elapsed,
            recolored,
        }
    }
}

impl fmt::Display for RecolorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recoloring report")?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(
            f,
            "Input: {} vertices, {} edges, {} components",
            self.input.vertex_count, self.input.edge_count, self.input.components
        )?;
        if !self.input.conflicts.is_empty() {
            writeln!(f, "Input conflicts: {}", self.input.conflicts.len())?;
        }
        writeln!(f, "Search time: {:?}", self.analysis_time)?;
        writeln!(f, "Steps: {} ({} dead ends)", self.steps, self.dead_ends)?;
        match self.outcome {
            OutcomeKind::Recolored => writeln!(f, "Outcome: recolored")?,
            OutcomeKind::Infeasible => writeln!(f, "Outcome: the graph cannot be recolored")?,
            OutcomeKind::Empty => writeln!(f, "Outcome: the graph has no vertices")?,
        }
        if let Some(document) = &self.recolored {
            for (id, record) in document.iter() {
                writeln!(f, "  {}: {}", id, record.color)?;
            }
        }
        Ok(())
    }
}

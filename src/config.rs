//! Optional TOML configuration.
//!
//! ```toml
//! [search]
//! max_depth = 2000
//! max_steps = 1000000
//! time_limit_ms = 5000
//!
//! [render]
//! frame_delay_ms = 200
//! ```
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recolor::{DEFAULT_MAX_DEPTH, SearchLimits};
use crate::render::Pacing;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    /// `0` disables the depth guard.
    pub max_depth: usize,
    pub max_steps: Option<u64>,
    pub time_limit_ms: Option<u64>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_steps: None,
            time_limit_ms: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSection {
    /// Fixed delay per animation frame; scaled by vertex count when absent.
    pub frame_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecolorConfig {
    pub search: SearchSection,
    pub render: RenderSection,
}

impl RecolorConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_depth: Some(self.search.max_depth).filter(|&d| d > 0),
            max_steps: self.search.max_steps,
            time_limit: self.search.time_limit_ms.map(Duration::from_millis),
        }
    }

    pub fn pacing(&self, vertex_count: usize) -> Pacing {
        match self.render.frame_delay_ms {
            Some(ms) => Pacing::new(Duration::from_millis(ms)),
            None => Pacing::for_vertex_count(vertex_count),
        }
    }
}

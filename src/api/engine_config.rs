use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::VisualizationType;
use crate::error::{ChartError, ChartResult};

use super::chart_limits::LimitsProfile;

/// Default cap on zero-alignment shifts per call.
///
/// Each shift moves the zero tick by one slot, so the cap only matters for
/// axes whose zero tick vanished mid-alignment.
pub const DEFAULT_MAX_ALIGNMENT_ITERATIONS: usize = 64;

fn default_max_alignment_iterations() -> usize {
    DEFAULT_MAX_ALIGNMENT_ITERATIONS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_max_alignment_iterations")]
    pub max_alignment_iterations: usize,
    /// Per chart type replacements for the static limit table.
    #[serde(default)]
    pub limits_overrides: IndexMap<VisualizationType, LimitsProfile>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_alignment_iterations: DEFAULT_MAX_ALIGNMENT_ITERATIONS,
            limits_overrides: IndexMap::new(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_alignment_iterations(mut self, max_alignment_iterations: usize) -> Self {
        self.max_alignment_iterations = max_alignment_iterations;
        self
    }

    #[must_use]
    pub fn with_limits_override(mut self, kind: VisualizationType, limits: LimitsProfile) -> Self {
        self.limits_overrides.insert(kind, limits);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.max_alignment_iterations == 0 {
            return Err(ChartError::InvalidData(
                "max alignment iterations must be >= 1".to_owned(),
            ));
        }

        for (kind, limits) in &self.limits_overrides {
            let has_zero_limit = [limits.series, limits.categories, limits.data_points]
                .into_iter()
                .flatten()
                .any(|limit| limit == 0);
            if has_zero_limit {
                return Err(ChartError::InvalidData(format!(
                    "limits override for `{kind}` must use limits >= 1"
                )));
            }
        }

        Ok(self)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart and series types understood by the configuration engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    Column,
    Bar,
    Line,
    Area,
    Pie,
    Donut,
    Funnel,
    Scatter,
    Bubble,
    Heatmap,
    Treemap,
    Combo,
}

impl VisualizationType {
    pub const ALL: [VisualizationType; 12] = [
        Self::Column,
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Pie,
        Self::Donut,
        Self::Funnel,
        Self::Scatter,
        Self::Bubble,
        Self::Heatmap,
        Self::Treemap,
        Self::Combo,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Funnel => "funnel",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Heatmap => "heatmap",
            Self::Treemap => "treemap",
            Self::Combo => "combo",
        }
    }

    /// Line-family series keep the engine's own tick layout.
    #[must_use]
    pub fn is_line_family(self) -> bool {
        matches!(self, Self::Line)
    }

    #[must_use]
    pub fn is_treemap(self) -> bool {
        matches!(self, Self::Treemap)
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisualizationType {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ChartError::UnsupportedVisualizationType {
                requested: input.to_owned(),
                supported: Self::ALL
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Which collection an axis belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisKind {
    X,
    #[default]
    Y,
}

/// Optional stacking mode applied to column-family series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stacking {
    Normal,
    Percent,
}

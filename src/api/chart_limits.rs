use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::VisualizationType;

pub const DEFAULT_SERIES_LIMIT: usize = 1000;
pub const DEFAULT_CATEGORIES_LIMIT: usize = 365;
pub const DEFAULT_DATA_POINTS_LIMIT: usize = 2000;
pub const PIE_CHART_LIMIT: usize = 20;
pub const HEATMAP_DATA_POINTS_LIMIT: usize = 10_000;

/// Largest data shape a chart type renders safely. Unset dimensions are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LimitsProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_points: Option<usize>,
}

impl LimitsProfile {
    #[must_use]
    pub const fn new(series: Option<usize>, categories: Option<usize>, data_points: Option<usize>) -> Self {
        Self {
            series,
            categories,
            data_points,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: usize) -> Self {
        self.series = Some(series);
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: usize) -> Self {
        self.categories = Some(categories);
        self
    }

    #[must_use]
    pub fn with_data_points(mut self, data_points: usize) -> Self {
        self.data_points = Some(data_points);
        self
    }
}

/// Category counts of the view-by dimension.
///
/// `Grouped` holds one count per outer attribute value when viewing by two attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryCounts {
    Flat(usize),
    Grouped(Vec<usize>),
}

impl CategoryCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Self::Flat(count) => *count,
            Self::Grouped(groups) => groups.iter().sum(),
        }
    }
}

impl Default for CategoryCounts {
    fn default() -> Self {
        Self::Flat(0)
    }
}

/// Size and sign summary of the data about to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChartDataShape {
    pub series_count: usize,
    pub categories: CategoryCounts,
    pub per_series_point_counts: Vec<usize>,
    pub has_negative_values: bool,
}

impl ChartDataShape {
    /// Summarizes series data. Treemap root nodes are synthetic totals and do
    /// not count as data points.
    #[must_use]
    pub fn from_chart_data(kind: VisualizationType, data: &ChartData) -> Self {
        let per_series_point_counts = data
            .series
            .iter()
            .map(|series| {
                if kind.is_treemap() {
                    series.points.iter().filter(|point| !point.is_root_node()).count()
                } else {
                    series.points.len()
                }
            })
            .collect();

        Self {
            series_count: data.series.len(),
            categories: data.categories.clone(),
            per_series_point_counts,
            has_negative_values: data.has_negative_values(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesPoint {
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    /// Present only on treemap root nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SeriesPoint {
    #[must_use]
    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn root(id: impl Into<String>, value: f64) -> Self {
        Self {
            value: Some(value),
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_root_node(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.y.is_some_and(|y| y < 0.0) || self.value.is_some_and(|value| value < 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesData {
    pub points: Vec<SeriesPoint>,
}

impl SeriesData {
    #[must_use]
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn from_y_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(SeriesPoint::y).collect())
    }
}

/// Chart data as produced from an execution result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    pub series: Vec<SeriesData>,
    pub categories: CategoryCounts,
}

impl ChartData {
    #[must_use]
    pub fn has_negative_values(&self) -> bool {
        self.series
            .iter()
            .any(|series| series.points.iter().any(SeriesPoint::is_negative))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationResult {
    pub data_too_large: bool,
    pub has_negative_value: bool,
}

impl ValidationResult {
    #[must_use]
    pub fn is_renderable(self) -> bool {
        !self.data_too_large && !self.has_negative_value
    }
}

/// Static limit table keyed by chart type.
#[must_use]
pub fn limits_for(kind: VisualizationType) -> LimitsProfile {
    match kind {
        VisualizationType::Scatter => {
            LimitsProfile::new(Some(DEFAULT_SERIES_LIMIT), Some(DEFAULT_SERIES_LIMIT), None)
        }
        VisualizationType::Pie | VisualizationType::Donut | VisualizationType::Funnel => {
            LimitsProfile::new(Some(1), Some(PIE_CHART_LIMIT), None)
        }
        VisualizationType::Treemap => LimitsProfile::new(
            Some(DEFAULT_SERIES_LIMIT),
            Some(DEFAULT_DATA_POINTS_LIMIT),
            Some(DEFAULT_DATA_POINTS_LIMIT),
        ),
        VisualizationType::Heatmap => LimitsProfile::new(
            Some(DEFAULT_SERIES_LIMIT),
            Some(DEFAULT_CATEGORIES_LIMIT),
            Some(HEATMAP_DATA_POINTS_LIMIT),
        ),
        _ => LimitsProfile::new(
            Some(DEFAULT_SERIES_LIMIT),
            Some(DEFAULT_CATEGORIES_LIMIT),
            None,
        ),
    }
}

/// Part-to-whole charts cannot show negative values.
#[must_use]
pub fn forbids_negative_values(kind: VisualizationType) -> bool {
    matches!(
        kind,
        VisualizationType::Pie
            | VisualizationType::Donut
            | VisualizationType::Funnel
            | VisualizationType::Treemap
    )
}

#[must_use]
pub fn is_within_limits(shape: &ChartDataShape, limits: &LimitsProfile) -> bool {
    let series_ok = limits
        .series
        .is_none_or(|limit| shape.series_count <= limit);
    let categories_ok = limits
        .categories
        .is_none_or(|limit| shape.categories.total() <= limit);
    let data_points_ok = limits.data_points.is_none_or(|limit| {
        shape
            .per_series_point_counts
            .iter()
            .all(|count| *count <= limit)
    });

    series_ok && categories_ok && data_points_ok
}

#[must_use]
pub fn validate(kind: VisualizationType, limits: &LimitsProfile, shape: &ChartDataShape) -> ValidationResult {
    let result = ValidationResult {
        data_too_large: !is_within_limits(shape, limits),
        has_negative_value: forbids_negative_values(kind) && shape.has_negative_values,
    };
    debug!(
        %kind,
        series_count = shape.series_count,
        categories = shape.categories.total(),
        data_too_large = result.data_too_large,
        has_negative_value = result.has_negative_value,
        "validated chart data"
    );
    result
}

/// Validates chart data against `limits`, or the chart type's static profile.
#[must_use]
pub fn validate_chart_data(
    kind: VisualizationType,
    limits: Option<LimitsProfile>,
    data: &ChartData,
) -> ValidationResult {
    let limits = limits.unwrap_or_else(|| limits_for(kind));
    let shape = ChartDataShape::from_chart_data(kind, data);
    validate(kind, &limits, &shape)
}

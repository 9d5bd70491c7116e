//! Pre-render min/max selection that puts zero at the same height on both Y axes.
//!
//! The engine lays ticks out from these extremes; the tick-amount hook then
//! only has to fix the remaining off-by-a-tick mismatches.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Stacking, VisualizationType};

/// User-facing options of one Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct YAxisOptions {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub opposite: bool,
}

/// One series bound to a Y axis. Missing values are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSeries {
    pub y_axis: usize,
    #[serde(default)]
    pub kind: Option<VisualizationType>,
    pub values: Vec<Option<f64>>,
}

impl AxisSeries {
    #[must_use]
    pub fn new(y_axis: usize, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            y_axis,
            kind: None,
            values: values.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: VisualizationType) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DualAxisConfig {
    pub y_axes: Vec<YAxisOptions>,
    pub series: Vec<AxisSeries>,
}

/// Effective extremes of one Y axis before alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxInfo {
    pub id: usize,
    pub min: f64,
    pub max: f64,
    pub is_set_min: bool,
    pub is_set_max: bool,
}

impl MinMaxInfo {
    fn has_user_extreme(&self) -> bool {
        self.is_set_min || self.is_set_max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMinMax {
    pub min: f64,
    pub max: f64,
    pub is_user_min_max: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZeroAlignment {
    /// Not a dual-axis chart; nothing to configure.
    NotDualAxis,
    /// At least one axis has an empty range. Hidden axes hide their series too.
    InvalidAxes {
        axis_visible: [bool; 2],
        series_visible: Vec<bool>,
    },
    /// Both axes carry full user min/max and are taken as they are.
    UserMinMax,
    Computed([AxisMinMax; 2]),
}

impl ZeroAlignment {
    /// Whether any Y axis carries user-entered extremes.
    #[must_use]
    pub fn user_min_max(&self) -> bool {
        match self {
            Self::UserMinMax => true,
            Self::Computed(axes) => axes.iter().any(|axis| axis.is_user_min_max),
            Self::NotDualAxis | Self::InvalidAxes { .. } => false,
        }
    }
}

fn series_on_axis(series: &[AxisSeries], axis_index: usize) -> impl Iterator<Item = &AxisSeries> {
    series.iter().filter(move |item| item.y_axis == axis_index)
}

/// Line charts, and combo axes holding only line series, keep raw data extremes.
#[must_use]
pub fn is_line_on_axis(series: &[AxisSeries], axis_index: usize, chart_type: VisualizationType) -> bool {
    match chart_type {
        VisualizationType::Line => true,
        VisualizationType::Combo => series_on_axis(series, axis_index)
            .all(|item| item.kind.is_some_and(VisualizationType::is_line_family)),
        _ => false,
    }
}

fn data_min_max<'a>(series: impl Iterator<Item = &'a AxisSeries>, is_line: bool) -> (f64, f64) {
    let (min, max) = series
        .flat_map(|item| item.values.iter().flatten().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });

    if is_line {
        (min, max)
    } else {
        (min.min(0.0), max.max(0.0))
    }
}

/// Transposes per-series values into per-category stacks.
fn stacked_columns<'a>(series: impl Iterator<Item = &'a AxisSeries>) -> Vec<Vec<f64>> {
    let rows: Vec<&[Option<f64>]> = series.map(|item| item.values.as_slice()).collect();
    let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

    (0..width)
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column).copied().flatten())
                .collect()
        })
        .collect()
}

/// Rewrites each stack as percentages of its absolute total. Zero entries drop out.
#[must_use]
pub fn convert_to_percent(columns: &[Vec<f64>]) -> Vec<Vec<f64>> {
    columns
        .iter()
        .map(|column| {
            let non_zero: Vec<f64> = column.iter().copied().filter(|value| *value != 0.0).collect();
            let total: f64 = non_zero.iter().map(|value| value.abs()).sum();
            non_zero.iter().map(|value| value / total * 100.0).collect()
        })
        .collect()
}

fn stacked_min_max(columns: &[Vec<f64>]) -> (f64, f64) {
    if columns.is_empty() {
        return (0.0, 0.0);
    }

    columns
        .iter()
        .map(|column| {
            column.iter().fold((0.0, 0.0), |(negative, positive), value| {
                if *value < 0.0 {
                    (negative + value, positive)
                } else {
                    (negative, positive + value)
                }
            })
        })
        .fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), (column_min, column_max)| (min.min(column_min), max.max(column_max)),
        )
}

/// Effective extremes of every configured Y axis.
#[must_use]
pub fn min_max_info(
    config: &DualAxisConfig,
    stacking: Option<Stacking>,
    chart_type: VisualizationType,
) -> Vec<MinMaxInfo> {
    config
        .y_axes
        .iter()
        .enumerate()
        .map(|(axis_index, options)| {
            let is_line = is_line_on_axis(&config.series, axis_index, chart_type);
            let on_axis = series_on_axis(&config.series, axis_index);

            let (data_min, data_max) = match stacking {
                Some(stacking) if !is_line => {
                    let columns = stacked_columns(on_axis);
                    if stacking == Stacking::Percent && !options.opposite {
                        stacked_min_max(&convert_to_percent(&columns))
                    } else {
                        stacked_min_max(&columns)
                    }
                }
                _ => data_min_max(on_axis, is_line),
            };

            MinMaxInfo {
                id: axis_index,
                min: options.min.unwrap_or(data_min),
                max: options.max.unwrap_or(data_max),
                is_set_min: options.min.is_some(),
                is_set_max: options.max.is_some(),
            }
        })
        .collect()
}

fn sign_canon(value: f64) -> i8 {
    if value == 0.0 {
        0
    } else if value > 0.0 {
        1
    } else {
        -1
    }
}

fn is_zero_or_nan(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

fn calculate_min(idx: usize, infos: &[MinMaxInfo; 2], axis_index: usize) -> f64 {
    let source = &infos[idx];
    let fraction = if is_zero_or_nan(source.max) {
        source.min
    } else {
        source.min / source.max
    };
    fraction * infos[axis_index].max
}

fn calculate_max(idx: usize, infos: &[MinMaxInfo; 2], axis_index: usize) -> f64 {
    let source = &infos[idx];
    let fraction = if is_zero_or_nan(source.min) {
        source.max
    } else {
        source.max / source.min
    };
    fraction * infos[axis_index].min
}

/// With user extremes on any axis the limit follows the axis picked by
/// `pick`; otherwise both candidates compete through `extreme`.
fn derived_limit(
    infos: &[MinMaxInfo; 2],
    axis_index: usize,
    pick: fn(&[MinMaxInfo; 2]) -> usize,
    calculate: fn(usize, &[MinMaxInfo; 2], usize) -> f64,
    extreme: fn(f64, f64) -> f64,
) -> f64 {
    if infos.iter().any(MinMaxInfo::has_user_extreme) {
        return calculate(pick(infos), infos, axis_index);
    }
    extreme(
        calculate(0, infos, axis_index),
        calculate(1, infos, axis_index),
    )
}

/// Extremes for `axis_index` that place zero consistently with the other axis.
///
/// `min`/`max` are the chart-type adjusted data extremes of that axis. User
/// extremes always win over computed ones.
#[must_use]
pub fn zero_align_min_max(axis_index: usize, min: f64, max: f64, infos: &[MinMaxInfo; 2]) -> (f64, f64) {
    let own = infos[axis_index];
    let canon = (*infos).map(|info| (sign_canon(info.min), sign_canon(info.max)));
    let (mut new_min, mut new_max) = (own.min, own.max);

    if canon.iter().all(|(lo, hi)| *lo <= 0 && *hi <= 0) {
        new_max = max.min(0.0);
    } else if canon.iter().all(|(lo, hi)| *lo >= 0 && *hi >= 0) {
        new_min = min.max(0.0);
    } else if canon[0].1 == canon[1].1 {
        new_min = derived_limit(
            infos,
            axis_index,
            |infos| if infos[0].min <= infos[1].min { 0 } else { 1 },
            calculate_min,
            f64::min,
        );
    } else if canon[0].0 == canon[1].0 {
        new_max = derived_limit(
            infos,
            axis_index,
            |infos| if infos[0].max > infos[1].max { 0 } else { 1 },
            calculate_max,
            f64::max,
        );
    } else if own.min < 0.0 {
        new_max = new_min.abs();
    } else {
        new_min = -new_max;
    }

    (
        if own.is_set_min { own.min } else { new_min },
        if own.is_set_max { own.max } else { new_max },
    )
}

fn extreme_for_chart_type(extreme: f64, is_line: bool) -> f64 {
    if is_line { extreme } else { extreme.min(0.0) }
}

fn hide_invalid_axes(config: &DualAxisConfig, infos: &[MinMaxInfo; 2], chart_type: VisualizationType) -> ZeroAlignment {
    let axis_visible = [0, 1].map(|axis_index| {
        let info = &infos[axis_index];
        let is_invisible = if is_line_on_axis(&config.series, axis_index, chart_type) {
            info.min > info.max
        } else {
            info.min >= info.max
        };
        !is_invisible
    });
    let series_visible = config
        .series
        .iter()
        .map(|item| axis_visible.get(item.y_axis).copied().unwrap_or(true))
        .collect();

    ZeroAlignment::InvalidAxes {
        axis_visible,
        series_visible,
    }
}

/// Computes zero-aligned extremes for a dual-axis chart.
#[must_use]
pub fn zero_align_configuration(
    chart_type: VisualizationType,
    stacking: Option<Stacking>,
    config: &DualAxisConfig,
) -> ZeroAlignment {
    if config.y_axes.len() != 2 {
        return ZeroAlignment::NotDualAxis;
    }

    let infos: [MinMaxInfo; 2] = match min_max_info(config, stacking, chart_type).try_into() {
        Ok(infos) => infos,
        Err(_) => return ZeroAlignment::NotDualAxis,
    };

    if infos.iter().any(|info| info.min >= info.max) {
        debug!(%chart_type, "dual axis chart has an empty axis range");
        return hide_invalid_axes(config, &infos, chart_type);
    }

    if infos.iter().all(|info| info.is_set_min && info.is_set_max) {
        return ZeroAlignment::UserMinMax;
    }

    let axes = [0, 1].map(|axis_index| {
        let info = infos[axis_index];
        let is_line = is_line_on_axis(&config.series, axis_index, chart_type);
        let (min, max) = zero_align_min_max(
            axis_index,
            extreme_for_chart_type(info.min, is_line),
            extreme_for_chart_type(info.max, is_line),
            &infos,
        );
        AxisMinMax {
            min,
            max,
            is_user_min_max: info.has_user_extreme(),
        }
    });

    debug!(
        %chart_type,
        left_min = axes[0].min,
        left_max = axes[0].max,
        right_min = axes[1].min,
        right_max = axes[1].max,
        "computed zero aligned axis extremes"
    );
    ZeroAlignment::Computed(axes)
}

#[cfg(test)]
mod tests {
    use super::{convert_to_percent, sign_canon, stacked_min_max};

    #[test]
    fn canon_maps_signs() {
        assert_eq!(sign_canon(0.0), 0);
        assert_eq!(sign_canon(3.0), 1);
        assert_eq!(sign_canon(-3.0), -1);
    }

    #[test]
    fn empty_stack_has_zero_extremes() {
        assert_eq!(stacked_min_max(&[]), (0.0, 0.0));
    }

    #[test]
    fn percent_conversion_uses_absolute_total() {
        let percent = convert_to_percent(&[vec![1000.0, -500.0, 500.0]]);
        assert_eq!(percent, vec![vec![50.0, -25.0, 25.0]]);
    }
}

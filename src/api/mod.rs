use tracing::debug;

use crate::core::{ChartAxes, Stacking, VisualizationType};
use crate::error::ChartResult;

mod axis_alignment_coordinator;
mod axis_scale_updater;
mod axis_score_resolver;
mod chart_limits;
mod clip_guard;
mod engine_config;
mod json_contract;
mod tick_amount_reconciler;
mod tick_direction_resolver;
mod zero_align_config_builder;

pub use axis_alignment_coordinator::{
    AlignmentStatus, SkipReason, TickAmountOutcome, adjust_tick_amount, align_to_base,
    alignment_pair, handled_by_engine, is_ready_to_align,
};
pub use axis_scale_updater::update_axis_scale;
pub use axis_score_resolver::{AxisPair, AxisScore, choose_base, score};
pub use chart_limits::{
    CategoryCounts, ChartData, ChartDataShape, DEFAULT_CATEGORIES_LIMIT, DEFAULT_DATA_POINTS_LIMIT,
    DEFAULT_SERIES_LIMIT, HEATMAP_DATA_POINTS_LIMIT, LimitsProfile, PIE_CHART_LIMIT, SeriesData,
    SeriesPoint, ValidationResult, forbids_negative_values, is_within_limits, limits_for, validate,
    validate_chart_data,
};
pub use clip_guard::prevent_clip;
pub use engine_config::{DEFAULT_MAX_ALIGNMENT_ITERATIONS, EngineConfig};
pub use json_contract::{
    ENGINE_CONFIG_JSON_SCHEMA_V1, EngineConfigJsonContractV1, VALIDATION_RESULT_JSON_SCHEMA_V1,
    ValidationResultJsonContractV1,
};
pub use tick_amount_reconciler::{adds_to_front, reconcile, selection_range};
pub use tick_direction_resolver::{Direction, direction, zero_index_gap};
pub use zero_align_config_builder::{
    AxisMinMax, AxisSeries, DualAxisConfig, MinMaxInfo, YAxisOptions, ZeroAlignment,
    convert_to_percent, is_line_on_axis, min_max_info, zero_align_configuration,
    zero_align_min_max,
};

/// Entry point used by the chart-rendering layer.
///
/// Holds validated configuration and routes render-pass callbacks to the
/// alignment and validation routines.
#[derive(Debug, Clone, Default)]
pub struct ChartConfigEngine {
    config: EngineConfig,
}

impl ChartConfigEngine {
    pub fn new(config: EngineConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Self::new(EngineConfig::from_json_compat_str(input)?)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Limit profile for `kind`, honoring configured overrides.
    #[must_use]
    pub fn limits_for(&self, kind: VisualizationType) -> LimitsProfile {
        self.config
            .limits_overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| limits_for(kind))
    }

    #[must_use]
    pub fn validate_chart_data(&self, kind: VisualizationType, data: &ChartData) -> ValidationResult {
        validate_chart_data(kind, Some(self.limits_for(kind)), data)
    }

    /// Tick-amount hook for one axis whose natural tick layout is ready.
    pub fn adjust_tick_amount(&self, chart: &mut ChartAxes, axis_index: usize) -> TickAmountOutcome {
        adjust_tick_amount(chart, axis_index, self.config.max_alignment_iterations)
    }

    /// Runs the tick-amount hook over every axis in chart order.
    pub fn finalize_axes(&self, chart: &mut ChartAxes) -> Vec<TickAmountOutcome> {
        let outcomes: Vec<_> = (0..chart.axes().len())
            .map(|axis_index| self.adjust_tick_amount(chart, axis_index))
            .collect();
        debug!(axes = outcomes.len(), "finalized chart axes");
        outcomes
    }

    /// Zero-aligned extremes; also records user min/max on `chart` for the clip guard.
    pub fn prepare_dual_axis(
        &self,
        chart: &mut ChartAxes,
        stacking: Option<Stacking>,
        config: &DualAxisConfig,
    ) -> ZeroAlignment {
        let alignment = zero_align_configuration(chart.chart_type, stacking, config);
        chart.user_min_max = alignment.user_min_max();
        alignment
    }
}

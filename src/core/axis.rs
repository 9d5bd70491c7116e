use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::finite_or_none;
use crate::core::tick_set::TickSet;
use crate::core::types::{AxisKind, VisualizationType};

/// Rendered and data extremes of one axis.
///
/// Every field may be absent while the engine has not computed it yet.
/// Sign predicates treat an absent value as failing the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisExtremes {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub data_min: Option<f64>,
    pub data_max: Option<f64>,
}

impl AxisExtremes {
    #[must_use]
    pub fn data_at_least_zero(&self) -> bool {
        at_least_zero(self.data_min)
    }

    #[must_use]
    pub fn data_at_most_zero(&self) -> bool {
        at_most_zero(self.data_max)
    }

    #[must_use]
    pub fn min_at_least_zero(&self) -> bool {
        at_least_zero(self.min)
    }

    #[must_use]
    pub fn max_at_most_zero(&self) -> bool {
        at_most_zero(self.max)
    }

    /// True when the rendered range hides part of the data range.
    #[must_use]
    pub fn is_cut_off(&self) -> bool {
        let cut_below = matches!((self.min, self.data_min), (Some(min), Some(data_min)) if min > data_min);
        let cut_above = matches!((self.max, self.data_max), (Some(max), Some(data_max)) if max < data_max);
        cut_below || cut_above
    }
}

fn at_least_zero(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v >= 0.0)
}

fn at_most_zero(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v <= 0.0)
}

/// Render-time view of one chart axis.
///
/// A single alignment call owns the axis exclusively through `&mut`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub kind: AxisKind,
    pub ticks: TickSet,
    /// Tick count the engine wants this axis to end up with.
    pub tick_amount: usize,
    pub extremes: AxisExtremes,
    pub opposite: bool,
    pub visible: bool,
    pub start_on_tick: bool,
    pub end_on_tick: bool,
    /// Pixels per data unit.
    pub trans_a: f64,
    #[serde(default)]
    pub series: SmallVec<[VisualizationType; 4]>,
}

impl Axis {
    #[must_use]
    pub fn new(kind: AxisKind, ticks: TickSet) -> Self {
        Self {
            kind,
            tick_amount: ticks.len(),
            ticks,
            extremes: AxisExtremes::default(),
            opposite: false,
            visible: true,
            start_on_tick: true,
            end_on_tick: true,
            trans_a: 1.0,
            series: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn y(ticks: TickSet) -> Self {
        Self::new(AxisKind::Y, ticks)
    }

    #[must_use]
    pub fn x(ticks: TickSet) -> Self {
        Self::new(AxisKind::X, ticks)
    }

    #[must_use]
    pub fn with_tick_amount(mut self, tick_amount: usize) -> Self {
        self.tick_amount = tick_amount;
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.extremes.min = finite_or_none(Some(min));
        self.extremes.max = finite_or_none(Some(max));
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.extremes.min = finite_or_none(Some(min));
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.extremes.max = finite_or_none(Some(max));
        self
    }

    #[must_use]
    pub fn with_data_range(mut self, data_min: f64, data_max: f64) -> Self {
        self.extremes.data_min = finite_or_none(Some(data_min));
        self.extremes.data_max = finite_or_none(Some(data_max));
        self
    }

    #[must_use]
    pub fn opposite(mut self) -> Self {
        self.opposite = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn with_tick_snapping(mut self, start_on_tick: bool, end_on_tick: bool) -> Self {
        self.start_on_tick = start_on_tick;
        self.end_on_tick = end_on_tick;
        self
    }

    #[must_use]
    pub fn with_trans_a(mut self, trans_a: f64) -> Self {
        self.trans_a = trans_a;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: impl IntoIterator<Item = VisualizationType>) -> Self {
        self.series.extend(series);
        self
    }

    #[must_use]
    pub fn is_y(&self) -> bool {
        self.kind == AxisKind::Y
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.extremes.data_min.is_some() && self.extremes.data_max.is_some()
    }
}

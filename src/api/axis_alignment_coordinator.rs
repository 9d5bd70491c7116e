use tracing::{debug, trace, warn};

use crate::core::{Axis, ChartAxes};
use crate::error::{ChartError, ChartResult};

use super::axis_scale_updater::update_axis_scale;
use super::axis_score_resolver::{AxisPair, choose_base};
use super::clip_guard::prevent_clip;
use super::tick_amount_reconciler::reconcile;
use super::tick_direction_resolver::{Direction, direction};

/// Why the tick-amount hook left an axis alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingAxis,
    NoData,
    /// The engine's own tick-amount handling applies.
    HandledByEngine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentStatus {
    NotRequired,
    Aligned {
        pair: AxisPair,
        iterations: usize,
        clip_prevented: bool,
    },
    /// Alignment failed; the secondary axis kept its reconciled ticks.
    Aborted { pair: AxisPair },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAmountOutcome {
    Skipped(SkipReason),
    Adjusted {
        ticks_changed: bool,
        alignment: AlignmentStatus,
    },
}

/// True when the axis should keep the engine's default tick-amount behavior.
///
/// Only a pair of visible Y axes on a non line-family chart gets custom
/// alignment.
#[must_use]
pub fn handled_by_engine(chart: &ChartAxes, axis_index: usize) -> bool {
    let Some(axis) = chart.axis(axis_index) else {
        return true;
    };
    if !axis.is_y() {
        return true;
    }

    let y_axes = chart.y_axis_indices();
    if y_axes.len() != 2 {
        return true;
    }
    if y_axes
        .iter()
        .any(|index| chart.axis(*index).is_some_and(|axis| !axis.visible))
    {
        return true;
    }

    chart.is_line_family()
}

/// Base and secondary roles of the two Y axes, primary (non-opposite) first on ties.
#[must_use]
pub fn alignment_pair(chart: &ChartAxes) -> Option<AxisPair> {
    let y_axes = chart.y_axis_indices();
    let [first, second] = y_axes.as_slice() else {
        return None;
    };
    let (primary, secondary) = match (chart.axis(*first), chart.axis(*second)) {
        (Some(a), Some(b)) if a.opposite && !b.opposite => (*second, *first),
        (Some(_), Some(_)) => (*first, *second),
        _ => return None,
    };

    Some(choose_base(
        primary,
        chart.axis(primary)?,
        secondary,
        chart.axis(secondary)?,
    ))
}

/// Alignment is driven by the opposite axis once the pair disagrees on zero.
#[must_use]
pub fn is_ready_to_align(trigger: &Axis, base: &Axis, secondary: &Axis) -> bool {
    trigger.opposite && direction(Some(base), Some(secondary)) != Direction::Aligned
}

/// Shifts the secondary ticks one position at a time until both zero ticks share an index.
///
/// Returns the number of shifts. On failure the secondary ticks are restored.
pub fn align_to_base(secondary: &mut Axis, base: &Axis, max_iterations: usize) -> ChartResult<usize> {
    let original = secondary.ticks.clone();
    let result = shift_until_aligned(secondary, base, max_iterations);
    if result.is_err() {
        secondary.ticks = original;
    }
    result
}

fn shift_until_aligned(secondary: &mut Axis, base: &Axis, max_iterations: usize) -> ChartResult<usize> {
    let mut iterations = 0;
    loop {
        match direction(Some(base), Some(&*secondary)) {
            Direction::Aligned => return Ok(iterations),
            _ if iterations >= max_iterations => {
                return Err(ChartError::AlignmentAborted(format!(
                    "zero ticks still apart after {max_iterations} shifts"
                )));
            }
            Direction::ShiftRight => {
                secondary.ticks.push_front_step();
                secondary.ticks.drop_last();
            }
            Direction::ShiftLeft => {
                secondary.ticks.push_back_step();
                secondary.ticks.drop_first();
            }
        }
        iterations += 1;

        if secondary.ticks.is_empty() {
            return Err(ChartError::AlignmentAborted(
                "secondary axis ran out of ticks".to_owned(),
            ));
        }
        if secondary.ticks.zero_index().is_none() {
            return Err(ChartError::AlignmentAborted(
                "secondary axis lost its zero tick".to_owned(),
            ));
        }
        trace!(iterations, "shifted secondary axis ticks");
    }
}

/// Tick-amount hook run when the engine finishes laying out one axis.
///
/// Reconciles the tick count, and once the opposite axis arrives, aligns the
/// secondary Y axis to the base and uncovers clipped data. Alignment failures
/// are logged and never propagate.
pub fn adjust_tick_amount(
    chart: &mut ChartAxes,
    axis_index: usize,
    max_iterations: usize,
) -> TickAmountOutcome {
    let Some(axis) = chart.axis(axis_index) else {
        return TickAmountOutcome::Skipped(SkipReason::MissingAxis);
    };
    if !axis.has_data() {
        return TickAmountOutcome::Skipped(SkipReason::NoData);
    }
    if handled_by_engine(chart, axis_index) {
        return TickAmountOutcome::Skipped(SkipReason::HandledByEngine);
    }

    let Some(axis) = chart.axis_mut(axis_index) else {
        return TickAmountOutcome::Skipped(SkipReason::MissingAxis);
    };
    let previous_tick_count = axis.ticks.len();
    let ticks_changed = reconcile(axis);
    if ticks_changed {
        update_axis_scale(axis, previous_tick_count);
    }

    let alignment = match alignment_pair(chart) {
        Some(pair) if pair_ready(chart, axis_index, pair) => align_pair(chart, pair, max_iterations),
        _ => AlignmentStatus::NotRequired,
    };

    TickAmountOutcome::Adjusted {
        ticks_changed,
        alignment,
    }
}

fn pair_ready(chart: &ChartAxes, trigger_index: usize, pair: AxisPair) -> bool {
    match (
        chart.axis(trigger_index),
        chart.axis(pair.base),
        chart.axis(pair.secondary),
    ) {
        (Some(trigger), Some(base), Some(secondary)) => is_ready_to_align(trigger, base, secondary),
        _ => false,
    }
}

fn align_pair(chart: &mut ChartAxes, pair: AxisPair, max_iterations: usize) -> AlignmentStatus {
    let user_min_max = chart.user_min_max;
    let Some((base, secondary)) = chart.pair_mut(pair.base, pair.secondary) else {
        return AlignmentStatus::NotRequired;
    };

    let previous_tick_count = secondary.ticks.len();
    let iterations = match align_to_base(secondary, base, max_iterations) {
        Ok(iterations) => iterations,
        Err(err) => {
            warn!(
                error = %err,
                base = pair.base,
                secondary = pair.secondary,
                "skipping dual axis zero alignment"
            );
            return AlignmentStatus::Aborted { pair };
        }
    };
    update_axis_scale(secondary, previous_tick_count);

    let clip_prevented = prevent_clip(secondary, user_min_max).unwrap_or_else(|err| {
        warn!(error = %err, "skipping clip prevention after alignment");
        false
    });

    debug!(
        base = pair.base,
        secondary = pair.secondary,
        iterations,
        clip_prevented,
        "aligned dual axis zero ticks"
    );
    AlignmentStatus::Aligned {
        pair,
        iterations,
        clip_prevented,
    }
}

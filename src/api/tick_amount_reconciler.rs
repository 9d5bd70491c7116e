use std::ops::Range;

use tracing::trace;

use crate::core::Axis;

/// Decides whether the next grown tick goes in front of the first tick.
///
/// Evaluated once per added tick since the parity term depends on the
/// current tick count.
#[must_use]
pub fn adds_to_front(axis: &Axis) -> bool {
    let extremes = &axis.extremes;
    if extremes.data_at_most_zero() || extremes.max_at_most_zero() {
        return true;
    }

    let has_odd_tick_count = axis.ticks.len() % 2 == 1;
    !(extremes.data_at_least_zero() || extremes.min_at_least_zero() || has_odd_tick_count)
}

/// Window of `tick_amount` contiguous ticks kept when an axis has too many.
///
/// Positive data keeps the top ticks, negative data the bottom ones. Data
/// crossing zero keeps the window anchored at the end nearer to the zero tick;
/// equal distances keep the front window.
#[must_use]
pub fn selection_range(axis: &Axis) -> Range<usize> {
    let len = axis.ticks.len();
    let amount = axis.tick_amount.min(len);
    let front = 0..amount;
    let back = len - amount..len;

    if axis.extremes.data_at_least_zero() {
        return back;
    }
    if axis.extremes.data_at_most_zero() {
        return front;
    }

    match axis.ticks.zero_index() {
        Some(zero_index) => {
            let to_start = zero_index;
            let to_end = len - 1 - zero_index;
            if to_start <= to_end { front } else { back }
        }
        None => front,
    }
}

/// Grows or shrinks the ticks of `axis` until there are `tick_amount` of them.
///
/// Returns `true` when the tick positions changed.
pub fn reconcile(axis: &mut Axis) -> bool {
    let target = axis.tick_amount;
    let current = axis.ticks.len();
    if target == 0 || current == 0 || current == target {
        return false;
    }

    if current < target {
        while axis.ticks.len() < target {
            let added = if adds_to_front(axis) {
                axis.ticks.push_front_step()
            } else {
                axis.ticks.push_back_step()
            };
            if added.is_none() {
                break;
            }
        }
    } else {
        let window = selection_range(axis);
        axis.ticks.retain_window(window);
    }

    trace!(
        previous_count = current,
        tick_amount = target,
        first = ?axis.ticks.first(),
        last = ?axis.ticks.last(),
        "reconciled tick amount"
    );
    true
}

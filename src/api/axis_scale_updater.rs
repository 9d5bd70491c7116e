use crate::core::Axis;

/// Rescales `trans_a` and the rendered extremes after the tick layout changed.
///
/// `previous_tick_count` is the tick count the current `trans_a` was computed for.
pub fn update_axis_scale(axis: &mut Axis, previous_tick_count: usize) {
    if previous_tick_count >= 1 {
        let target_spans = axis.tick_amount.saturating_sub(1).max(1) as f64;
        axis.trans_a *= (previous_tick_count - 1) as f64 / target_spans;
    }

    let (Some(first), Some(last)) = (axis.ticks.first(), axis.ticks.last()) else {
        return;
    };

    axis.extremes.min = Some(if axis.start_on_tick {
        first
    } else {
        axis.extremes.min.map_or(first, |min| min.min(first))
    });
    axis.extremes.max = Some(if axis.end_on_tick {
        last
    } else {
        axis.extremes.max.map_or(last, |max| max.max(last))
    });
}

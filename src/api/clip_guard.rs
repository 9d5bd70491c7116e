use tracing::debug;

use crate::core::Axis;
use crate::error::ChartResult;

use super::axis_scale_updater::update_axis_scale;

/// Zooms the axis out when its rendered range hides part of the data.
///
/// User-entered min/max on either Y axis disables the guard. Doubling scales
/// ticks around zero, so the axis should already hold a zero tick.
/// Returns `true` when the interval was doubled.
pub fn prevent_clip(axis: &mut Axis, user_min_max: bool) -> ChartResult<bool> {
    if user_min_max || !axis.extremes.is_cut_off() {
        return Ok(false);
    }

    axis.ticks.double_interval()?;
    let tick_count = axis.ticks.len();
    update_axis_scale(axis, tick_count);

    debug!(
        interval = axis.ticks.interval(),
        min = ?axis.extremes.min,
        max = ?axis.extremes.max,
        "doubled tick interval to uncover clipped data"
    );
    Ok(true)
}

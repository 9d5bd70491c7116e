use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::Axis;

/// Where the secondary axis' zero tick has to travel to meet the primary's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    ShiftLeft = -1,
    Aligned = 0,
    ShiftRight = 1,
}

/// Compares zero-tick indices of two axes.
///
/// Missing axes and axes without an exact zero tick resolve to `Aligned`,
/// which leaves them untouched.
#[must_use]
pub fn direction(primary: Option<&Axis>, secondary: Option<&Axis>) -> Direction {
    let (Some(primary), Some(secondary)) = (primary, secondary) else {
        return Direction::Aligned;
    };
    let (Some(primary_zero), Some(secondary_zero)) =
        (primary.ticks.zero_index(), secondary.ticks.zero_index())
    else {
        return Direction::Aligned;
    };

    match primary_zero.cmp(&secondary_zero) {
        Ordering::Greater => Direction::ShiftRight,
        Ordering::Less => Direction::ShiftLeft,
        Ordering::Equal => Direction::Aligned,
    }
}

/// Distance between the zero ticks of two axes, when both have one.
#[must_use]
pub fn zero_index_gap(primary: &Axis, secondary: &Axis) -> Option<usize> {
    let primary_zero = primary.ticks.zero_index()?;
    let secondary_zero = secondary.ticks.zero_index()?;
    Some(primary_zero.abs_diff(secondary_zero))
}

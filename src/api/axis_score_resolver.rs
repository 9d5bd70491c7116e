use serde::{Deserialize, Serialize};

use crate::core::Axis;

/// How much of the sign range an axis' data covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisScore {
    NoData = 0,
    OneSided = 1,
    BothSigns = 2,
}

/// Base/secondary roles of the two Y axes for one alignment call.
///
/// Indices refer to the chart's axis list. Only `secondary` gets rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisPair {
    pub base: usize,
    pub secondary: usize,
}

#[must_use]
pub fn score(axis: &Axis) -> AxisScore {
    let (Some(data_min), Some(data_max)) = (axis.extremes.data_min, axis.extremes.data_max) else {
        return AxisScore::NoData;
    };
    if data_min.is_nan() || data_max.is_nan() {
        return AxisScore::NoData;
    }

    let lo = data_min.min(0.0);
    let hi = data_max.max(0.0);
    if lo < 0.0 && hi > 0.0 {
        AxisScore::BothSigns
    } else if lo < 0.0 || hi > 0.0 {
        AxisScore::OneSided
    } else {
        AxisScore::NoData
    }
}

/// Picks the dominant axis; on equal scores the primary axis stays the base.
#[must_use]
pub fn choose_base(
    primary_index: usize,
    primary: &Axis,
    secondary_index: usize,
    secondary: &Axis,
) -> AxisPair {
    if score(primary) >= score(secondary) {
        AxisPair {
            base: primary_index,
            secondary: secondary_index,
        }
    } else {
        AxisPair {
            base: secondary_index,
            secondary: primary_index,
        }
    }
}

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::axis::Axis;
use crate::core::types::VisualizationType;

/// Axes of one chart during a single render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxes {
    pub chart_type: VisualizationType,
    axes: Vec<Axis>,
    /// Set when either Y axis carries user-entered min/max.
    #[serde(default)]
    pub user_min_max: bool,
}

impl ChartAxes {
    #[must_use]
    pub fn new(chart_type: VisualizationType) -> Self {
        Self {
            chart_type,
            axes: Vec::new(),
            user_min_max: false,
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_user_min_max(mut self, user_min_max: bool) -> Self {
        self.user_min_max = user_min_max;
        self
    }

    pub fn push_axis(&mut self, axis: Axis) -> usize {
        self.axes.push(axis);
        self.axes.len() - 1
    }

    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    #[must_use]
    pub fn axis(&self, index: usize) -> Option<&Axis> {
        self.axes.get(index)
    }

    pub fn axis_mut(&mut self, index: usize) -> Option<&mut Axis> {
        self.axes.get_mut(index)
    }

    /// Indices of the Y axes in chart order.
    #[must_use]
    pub fn y_axis_indices(&self) -> SmallVec<[usize; 2]> {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, axis)| axis.is_y())
            .map(|(index, _)| index)
            .collect()
    }

    /// Line charts, and charts whose every Y-axis series is a line, are line-family.
    #[must_use]
    pub fn is_line_family(&self) -> bool {
        if self.chart_type.is_line_family() {
            return true;
        }

        let mut series = self
            .axes
            .iter()
            .filter(|axis| axis.is_y())
            .flat_map(|axis| axis.series.iter())
            .peekable();
        series.peek().is_some() && series.all(|kind| kind.is_line_family())
    }

    /// Borrows `base` shared and `secondary` exclusively.
    pub fn pair_mut(&mut self, base: usize, secondary: usize) -> Option<(&Axis, &mut Axis)> {
        let len = self.axes.len();
        if base == secondary || base >= len || secondary >= len {
            return None;
        }

        if base < secondary {
            let (head, tail) = self.axes.split_at_mut(secondary);
            Some((&head[base], &mut tail[0]))
        } else {
            let (head, tail) = self.axes.split_at_mut(base);
            Some((&tail[0], &mut head[secondary]))
        }
    }
}

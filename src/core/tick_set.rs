use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::correct_sum;
use crate::error::{ChartError, ChartResult};

/// Inline capacity covering the tick counts produced by common axis heights.
pub type TickPositions = SmallVec<[f64; 16]>;

/// Ordered tick positions of one axis together with their spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSet {
    positions: TickPositions,
    interval: f64,
}

impl TickSet {
    pub fn new(positions: impl IntoIterator<Item = f64>, interval: f64) -> ChartResult<Self> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick interval must be finite and > 0".to_owned(),
            ));
        }

        let positions: TickPositions = positions.into_iter().collect();
        if positions.iter().any(|tick| !tick.is_finite()) {
            return Err(ChartError::InvalidData(
                "tick positions must be finite".to_owned(),
            ));
        }
        if positions.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ChartError::InvalidData(
                "tick positions must be strictly ascending".to_owned(),
            ));
        }

        Ok(Self {
            positions,
            interval,
        })
    }

    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.positions.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.positions.last().copied()
    }

    /// Index of the tick sitting exactly on zero.
    #[must_use]
    pub fn zero_index(&self) -> Option<usize> {
        self.positions.iter().position(|tick| *tick == 0.0)
    }

    /// Prepends a tick one interval below the current first tick.
    pub fn push_front_step(&mut self) -> Option<f64> {
        let first = self.first()?;
        let tick = correct_sum(first, -self.interval);
        self.positions.insert(0, tick);
        Some(tick)
    }

    /// Appends a tick one interval above the current last tick.
    pub fn push_back_step(&mut self) -> Option<f64> {
        let last = self.last()?;
        let tick = correct_sum(last, self.interval);
        self.positions.push(tick);
        Some(tick)
    }

    pub fn drop_first(&mut self) -> Option<f64> {
        if self.positions.is_empty() {
            return None;
        }
        Some(self.positions.remove(0))
    }

    pub fn drop_last(&mut self) -> Option<f64> {
        self.positions.pop()
    }

    /// Keeps only the ticks inside `window`; out-of-range bounds are clamped.
    pub fn retain_window(&mut self, window: Range<usize>) {
        let end = window.end.min(self.positions.len());
        let start = window.start.min(end);
        self.positions.truncate(end);
        self.positions.drain(..start);
    }

    /// Doubles the spacing and scales every tick away from zero by the same factor.
    pub fn double_interval(&mut self) -> ChartResult<()> {
        let interval = self.interval * 2.0;
        if !interval.is_finite() {
            return Err(ChartError::InvalidData(
                "doubled tick interval is not finite".to_owned(),
            ));
        }
        if self.positions.iter().any(|tick| !(tick * 2.0).is_finite()) {
            return Err(ChartError::InvalidData(
                "doubled tick positions are not finite".to_owned(),
            ));
        }

        self.interval = interval;
        for tick in &mut self.positions {
            *tick *= 2.0;
        }
        Ok(())
    }
}

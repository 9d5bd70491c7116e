use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Upper bound on decimal places used when correcting tick arithmetic.
///
/// Steps that need more places than this are left uncorrected.
pub const FLOAT_CORRECTION_MAX_DECIMALS: u32 = 10;

/// Returns the smallest number of decimal places that reproduces `step` exactly.
#[must_use]
pub fn step_decimal_places(step: f64) -> Option<u32> {
    if !step.is_finite() {
        return None;
    }

    let step = step.abs();
    (0..=FLOAT_CORRECTION_MAX_DECIMALS).find(|places| {
        let scale = 10f64.powi(*places as i32);
        (step * scale).round() / scale == step
    })
}

/// Removes binary accumulation error from `value`, which was produced by adding
/// or subtracting multiples of `step`.
#[must_use]
pub fn correct_float(value: f64, step: f64) -> f64 {
    match step_decimal_places(step) {
        Some(places) => round_to_places(value, places),
        None => value,
    }
}

/// `anchor + delta`, rounded to the finer precision of the two operands.
#[must_use]
pub fn correct_sum(anchor: f64, delta: f64) -> f64 {
    let sum = anchor + delta;
    match (step_decimal_places(anchor), step_decimal_places(delta)) {
        (Some(a), Some(b)) => round_to_places(sum, a.max(b)),
        _ => sum,
    }
}

fn round_to_places(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}

/// Normalizes NaN and infinite extremes to "not computed".
#[must_use]
pub fn finite_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

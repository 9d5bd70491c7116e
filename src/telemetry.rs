//! Tracing setup for hosts embedding `chart-align`.
//!
//! Alignment aborts are reported at `warn`, tick and clip decisions at
//! `debug`/`trace` under the `chart_align` target.

/// Filter used when `RUST_LOG` is unset: aborted alignments only.
pub const DEFAULT_TRACING_FILTER: &str = "chart_align=warn";

/// Installs a compact subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_TRACING_FILTER`] when the variable is unset or invalid.
///
/// Returns `false` without the `telemetry` feature, or when a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `"chart_align::api=trace"` to follow every tick shift.
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}

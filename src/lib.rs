//! chart-align: chart-configuration derivation for dual-axis charts.
//!
//! The crate reconciles the tick layouts of two independently scaled Y axes
//! so that their zero lines coincide, and validates whether chart data is
//! small and well-signed enough to render.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartConfigEngine, EngineConfig};
pub use error::{ChartError, ChartResult};

pub mod axis;
pub mod chart;
pub mod primitives;
pub mod tick_set;
pub mod types;

pub use axis::{Axis, AxisExtremes};
pub use chart::ChartAxes;
pub use primitives::{FLOAT_CORRECTION_MAX_DECIMALS, correct_float, correct_sum};
pub use tick_set::{TickPositions, TickSet};
pub use types::{AxisKind, Stacking, VisualizationType};

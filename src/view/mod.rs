pub mod scales;
pub mod select;
pub mod state;

pub use scales::{ChartScales, LinearScale, SqrtScale, TimeScale};
pub use select::{is_selected, BrushRegion};
pub use state::{Redraw, SelectionStats, ViewModel, ViewState};

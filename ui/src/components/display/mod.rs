pub mod loading_indicator;
pub mod status_chart;

pub use loading_indicator::*;
pub use status_chart::*;

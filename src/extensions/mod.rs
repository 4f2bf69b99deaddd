//! Host-facing extension points.

mod listeners;

pub use listeners::{ChartContext, ChartEvent, ChartListener, ViewStateChange};

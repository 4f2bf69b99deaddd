pub mod bar_series;
pub mod candlestick;
pub mod curve;
pub mod line_series;
pub mod price_scale;
pub mod primitives;
pub mod record;
pub mod scale;
pub mod scale_builder;
pub mod time_scale;
pub mod types;

pub use bar_series::{BarGeometry, BarWidthMode, project_bars, resolve_bar_width};
pub use candlestick::{CandleGeometry, project_candles};
pub use curve::{PathCommand, monotone_x_path};
pub use line_series::{LinePoint, project_close_path, project_close_points};
pub use price_scale::{PriceScale, PriceTickFormat};
pub use record::{PriceRecord, Series};
pub use scale::{LinearScale, nice_ticks, tick_step};
pub use scale_builder::{ChartScales, build_scales};
pub use time_scale::{TimeScale, TimeTickInterval, format_time_tick};
pub use types::{Margin, PlotArea, Viewport};

//! price-chart: deterministic OHLC chart scenes.
//!
//! A [`ChartEngine`] turns a date-ordered price [`core::Series`] plus a small
//! view state (chart kind, grid flag) into a layered [`render::Scene`] with
//! axes, per-kind geometry and hover targets, and hands it to a
//! [`render::Renderer`]. Pointer input resolves against the scene's hover
//! targets and is published to [`extensions::ChartListener`]s.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};

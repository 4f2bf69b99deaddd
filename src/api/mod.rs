mod axis_scene_builder;
mod bar_scene_builder;
mod candlestick_scene_builder;
mod data_controller;
mod engine;
mod engine_config;
mod hover_controller;
mod line_scene_builder;
mod listener_dispatch;
mod render_style;
mod scene_composer;
mod view_state_controller;

pub use bar_scene_builder::BarRenderer;
pub use candlestick_scene_builder::CandlestickRenderer;
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use line_scene_builder::LineRenderer;
pub use render_style::ChartStyle;
pub use scene_composer::{ChartRenderer, compose_scene, renderer_for};

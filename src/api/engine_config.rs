use serde::{Deserialize, Serialize};

use crate::core::{BarWidthMode, Margin, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Every field has a default, so
/// `{}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_time_tick_count")]
    pub time_tick_count: usize,
    #[serde(default = "default_price_tick_count")]
    pub price_tick_count: usize,
    #[serde(default)]
    pub bar_width_mode: BarWidthMode,
    #[serde(default = "default_candle_body_width_px")]
    pub candle_body_width_px: f64,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_tooltip_offset_px")]
    pub tooltip_offset_px: f64,
    /// Rebuild and draw immediately after every invalidating mutation.
    #[serde(default = "default_auto_render")]
    pub auto_render: bool,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: Margin::default(),
            time_tick_count: default_time_tick_count(),
            price_tick_count: default_price_tick_count(),
            bar_width_mode: BarWidthMode::default(),
            candle_body_width_px: default_candle_body_width_px(),
            marker_radius_px: default_marker_radius_px(),
            tooltip_offset_px: default_tooltip_offset_px(),
            auto_render: default_auto_render(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_bar_width_mode(mut self, mode: BarWidthMode) -> Self {
        self.bar_width_mode = mode;
        self
    }

    #[must_use]
    pub fn with_auto_render(mut self, auto_render: bool) -> Self {
        self.auto_render = auto_render;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        PlotArea::resolve(self.viewport, self.margin)?;

        if self.time_tick_count == 0 || self.price_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick counts must be > 0".to_owned(),
            ));
        }
        if let BarWidthMode::Fixed { width_px } = self.bar_width_mode {
            if !width_px.is_finite() || width_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "fixed bar width must be finite and > 0".to_owned(),
                ));
            }
        }
        for (name, value) in [
            ("candle_body_width_px", self.candle_body_width_px),
            ("marker_radius_px", self.marker_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.tooltip_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_time_tick_count() -> usize {
    6
}

fn default_price_tick_count() -> usize {
    10
}

fn default_candle_body_width_px() -> f64 {
    10.0
}

fn default_marker_radius_px() -> f64 {
    5.0
}

fn default_tooltip_offset_px() -> f64 {
    10.0
}

fn default_auto_render() -> bool {
    true
}

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const ACCENT: Color = Color::rgb8(0xff, 0x75, 0x8c);
const ACCENT_SOFT: Color = Color::rgb8(0xff, 0xa0, 0x7a);

/// Colors and stroke widths used when composing a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background_color: Color,
    pub background_corner_radius_px: f64,
    /// Close line, markers and bars.
    pub series_color: Color,
    pub line_stroke_width: f64,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub wick_color: Color,
    pub wick_stroke_width: f64,
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub axis_tick_size_px: f64,
    /// Gap between a tick mark's end and its label.
    pub axis_label_padding_px: f64,
    pub axis_label_font_size_px: f64,
    pub grid_color: Color,
    pub grid_stroke_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgba(0.0, 0.0, 0.0, 0.5),
            background_corner_radius_px: 10.0,
            series_color: ACCENT,
            line_stroke_width: 3.0,
            marker_stroke_color: Color::rgb(1.0, 1.0, 1.0),
            marker_stroke_width: 2.0,
            wick_color: ACCENT,
            wick_stroke_width: 1.0,
            bullish_color: ACCENT,
            bearish_color: ACCENT_SOFT,
            axis_color: Color::rgb(1.0, 1.0, 1.0),
            axis_stroke_width: 1.0,
            axis_tick_size_px: 6.0,
            axis_label_padding_px: 3.0,
            axis_label_font_size_px: 10.0,
            grid_color: Color::rgba(1.0, 1.0, 1.0, 0.15),
            grid_stroke_width: 1.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background_color,
            self.series_color,
            self.marker_stroke_color,
            self.wick_color,
            self.bullish_color,
            self.bearish_color,
            self.axis_color,
            self.grid_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("line_stroke_width", self.line_stroke_width),
            ("wick_stroke_width", self.wick_stroke_width),
            ("axis_stroke_width", self.axis_stroke_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("grid_stroke_width", self.grid_stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("background_corner_radius_px", self.background_corner_radius_px),
            ("marker_stroke_width", self.marker_stroke_width),
            ("axis_tick_size_px", self.axis_tick_size_px),
            ("axis_label_padding_px", self.axis_label_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Body fill for a candle.
    #[must_use]
    pub fn candle_body_color(&self, is_bullish: bool) -> Color {
        if is_bullish {
            self.bullish_color
        } else {
            self.bearish_color
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Presentation used for the price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Candlestick,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Line, Self::Bar, Self::Candlestick];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Candlestick => "candlestick",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "candlestick" | "candle" => Ok(Self::Candlestick),
            other => Err(ChartError::InvalidData(format!(
                "unknown chart kind `{other}`"
            ))),
        }
    }
}

/// User-controlled presentation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewState {
    pub chart_kind: ChartKind,
    pub grid_visible: bool,
    /// Text shown next to the sidebar controls; empty when nothing is hovered.
    pub hover_label: String,
}

impl ViewState {
    /// Returns `true` when the kind actually changed.
    pub fn set_chart_kind(&mut self, kind: ChartKind) -> bool {
        if self.chart_kind == kind {
            return false;
        }
        self.chart_kind = kind;
        true
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    /// Returns `true` when the label actually changed.
    pub fn set_hover_label(&mut self, label: &str) -> bool {
        if self.hover_label == label {
            return false;
        }
        self.hover_label.clear();
        self.hover_label.push_str(label);
        true
    }
}

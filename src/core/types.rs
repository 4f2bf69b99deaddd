use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Logical canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1000, 600)
    }
}

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(60.0)
    }
}

/// Plot rectangle left after subtracting margins from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Resolves the plot rectangle.
    ///
    /// Margins must be finite and non-negative and must leave a plot area of
    /// positive width and height.
    pub fn resolve(viewport: Viewport, margin: Margin) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        for (side, value) in [
            ("top", margin.top),
            ("right", margin.right),
            ("bottom", margin.bottom),
            ("left", margin.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidLayout(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        if margin.left + margin.right >= width || margin.top + margin.bottom >= height {
            return Err(ChartError::InvalidLayout(format!(
                "margins leave no plot area inside {}x{}",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            left: margin.left,
            top: margin.top,
            right: width - margin.right,
            bottom: height - margin.bottom,
        })
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

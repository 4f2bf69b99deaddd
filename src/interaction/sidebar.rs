use serde::{Deserialize, Serialize};

use super::{ChartKind, ViewState};

/// Buttons of the chart sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SidebarControl {
    LineChart,
    BarChart,
    CandlestickChart,
    ToggleGrid,
}

/// State change requested by a sidebar click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    SetChartKind(ChartKind),
    ToggleGrid,
}

impl SidebarControl {
    pub const ALL: [Self; 4] = [
        Self::LineChart,
        Self::BarChart,
        Self::CandlestickChart,
        Self::ToggleGrid,
    ];

    /// Text published as hover label while the pointer is over the button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LineChart => "Line Chart",
            Self::BarChart => "Bar Chart",
            Self::CandlestickChart => "Candlestick Chart",
            Self::ToggleGrid => "Toggle grid",
        }
    }

    #[must_use]
    pub const fn action(self) -> SidebarAction {
        match self {
            Self::LineChart => SidebarAction::SetChartKind(ChartKind::Line),
            Self::BarChart => SidebarAction::SetChartKind(ChartKind::Bar),
            Self::CandlestickChart => SidebarAction::SetChartKind(ChartKind::Candlestick),
            Self::ToggleGrid => SidebarAction::ToggleGrid,
        }
    }

    /// Whether the button should render highlighted for `view`.
    #[must_use]
    pub fn is_active(self, view: &ViewState) -> bool {
        match self.action() {
            SidebarAction::SetChartKind(kind) => view.chart_kind == kind,
            SidebarAction::ToggleGrid => view.grid_visible,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{ChartKind, HoverEvent};

/// Read-only state snapshot passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub viewport: Viewport,
    pub record_count: usize,
    pub chart_kind: ChartKind,
    pub grid_visible: bool,
    pub hovered_record: Option<usize>,
}

/// Which part of the view state moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewStateChange {
    ChartKind(ChartKind),
    GridVisible(bool),
    HoverLabel(String),
}

/// Event stream exposed to listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    SeriesUpdated { record_count: usize },
    /// Input could not be turned into a series; nothing is drawn.
    SeriesRejected { reason: String },
    ViewStateChanged(ViewStateChange),
    Hover(HoverEvent),
    HoverClear,
    Rendered {
        shape_count: usize,
        hover_target_count: usize,
    },
    /// The surface was cleared and left empty.
    Cleared,
}

/// Observer interface for host applications.
///
/// Listeners see events and a context snapshot but cannot mutate the engine.
pub trait ChartListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ChartContext);
}

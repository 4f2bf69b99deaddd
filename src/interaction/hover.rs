use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::PriceRecord;

use super::ChartKind;

/// Published when the pointer enters a hoverable shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverEvent {
    pub record_index: usize,
    pub record: PriceRecord,
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub chart_kind: ChartKind,
}

impl HoverEvent {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    #[must_use]
    pub fn close(&self) -> f64 {
        self.record.close
    }

    /// Open price, only reported for candlesticks.
    #[must_use]
    pub fn open(&self) -> Option<f64> {
        match self.chart_kind {
            ChartKind::Candlestick => Some(self.record.open),
            ChartKind::Line | ChartKind::Bar => None,
        }
    }

    #[must_use]
    pub fn tooltip_text(&self) -> String {
        format_tooltip_text(self.chart_kind, &self.record)
    }

    /// Tooltip anchored `offset_px` right of and below the pointer.
    #[must_use]
    pub fn tooltip(&self, offset_px: f64) -> Tooltip {
        Tooltip {
            text: self.tooltip_text(),
            x: self.pointer_x + offset_px,
            y: self.pointer_y + offset_px,
        }
    }
}

/// `"{date}: {close}"`, or `"{date}: open {open}, close {close}"` for
/// candlesticks.
#[must_use]
pub fn format_tooltip_text(kind: ChartKind, record: &PriceRecord) -> String {
    match kind {
        ChartKind::Line | ChartKind::Bar => format!("{}: {}", record.date, record.close),
        ChartKind::Candlestick => format!(
            "{}: open {}, close {}",
            record.date, record.open, record.close
        ),
    }
}

/// Floating label content and position for the active hover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Outcome of feeding a hit-test result into [`HoverState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTransition {
    Unchanged,
    Entered(usize),
    Left(usize),
    Switched { from: usize, to: usize },
}

/// Tracks which hover target, if any, currently holds the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    active: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn active(self) -> Option<usize> {
        self.active
    }

    pub fn pointer_over(&mut self, hit: Option<usize>) -> HoverTransition {
        let transition = match (self.active, hit) {
            (previous, next) if previous == next => HoverTransition::Unchanged,
            (None, Some(next)) => HoverTransition::Entered(next),
            (Some(previous), None) => HoverTransition::Left(previous),
            (Some(from), Some(to)) => HoverTransition::Switched { from, to },
            (None, None) => HoverTransition::Unchanged,
        };
        self.active = hit;
        transition
    }

    /// Drops the active target, returning it.
    pub fn reset(&mut self) -> Option<usize> {
        self.active.take()
    }
}

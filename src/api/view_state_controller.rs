use tracing::{debug, trace};

use crate::extensions::{ChartEvent, ViewStateChange};
use crate::interaction::{ChartKind, SidebarAction, SidebarControl};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Switches the presentation; re-selecting the active kind is a no-op.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        if !self.view.set_chart_kind(kind) {
            return;
        }
        debug!(chart_kind = %kind, "chart kind changed");
        self.emit_event(ChartEvent::ViewStateChanged(ViewStateChange::ChartKind(
            kind,
        )));
        self.invalidate();
    }

    pub fn toggle_grid(&mut self) {
        self.view.toggle_grid();
        let grid_visible = self.view.grid_visible;
        debug!(grid_visible, "grid toggled");
        self.emit_event(ChartEvent::ViewStateChanged(ViewStateChange::GridVisible(
            grid_visible,
        )));
        self.invalidate();
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        if self.view.grid_visible != visible {
            self.toggle_grid();
        }
    }

    /// Updates the sidebar hover label. Never rebuilds the scene.
    pub fn set_hover_label(&mut self, label: &str) {
        if !self.view.set_hover_label(label) {
            return;
        }
        trace!(label, "hover label changed");
        self.emit_event(ChartEvent::ViewStateChanged(ViewStateChange::HoverLabel(
            label.to_owned(),
        )));
    }

    pub fn clear_hover_label(&mut self) {
        self.set_hover_label("");
    }

    pub fn click_control(&mut self, control: SidebarControl) {
        match control.action() {
            SidebarAction::SetChartKind(kind) => self.set_chart_kind(kind),
            SidebarAction::ToggleGrid => self.toggle_grid(),
        }
    }

    pub fn control_pointer_enter(&mut self, control: SidebarControl) {
        self.set_hover_label(control.label());
    }

    pub fn control_pointer_leave(&mut self) {
        self.clear_hover_label();
    }

    #[must_use]
    pub fn is_control_active(&self, control: SidebarControl) -> bool {
        control.is_active(&self.view)
    }

    /// Turning auto-render back on renders any pending invalidation.
    pub fn set_auto_render(&mut self, enabled: bool) {
        self.config.auto_render = enabled;
        if enabled && self.invalidated {
            self.invalidate();
        }
    }
}

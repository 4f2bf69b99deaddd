use tracing::trace;

use crate::extensions::ChartEvent;
use crate::interaction::{HoverEvent, HoverTransition, Tooltip};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Hit-tests the current scene and publishes hover transitions.
    ///
    /// Moving inside the hovered target publishes nothing.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let hit = self.scene.hover_target_index_at(x, y);
        match self.hover.pointer_over(hit) {
            HoverTransition::Unchanged => {}
            HoverTransition::Entered(index) => self.publish_hover(index, x, y),
            HoverTransition::Left(_) => self.publish_hover_clear(),
            HoverTransition::Switched { to, .. } => {
                self.publish_hover_clear();
                self.publish_hover(to, x, y);
            }
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.hover.reset().is_some() {
            self.publish_hover_clear();
        }
    }

    #[must_use]
    pub fn active_hover(&self) -> Option<&HoverEvent> {
        self.active_hover.as_ref()
    }

    /// Tooltip for the hovered record, offset from the pointer.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.active_hover
            .as_ref()
            .map(|event| event.tooltip(self.config.tooltip_offset_px))
    }

    /// Forgets the hovered target before its scene is replaced.
    pub(super) fn drop_hover(&mut self) {
        if self.hover.reset().is_some() {
            self.publish_hover_clear();
        }
    }

    fn publish_hover(&mut self, target_index: usize, x: f64, y: f64) {
        let Some(target) = self.scene.hover_targets.get(target_index).copied() else {
            return;
        };
        let event = HoverEvent {
            record_index: target.record_index,
            record: target.record,
            pointer_x: x,
            pointer_y: y,
            chart_kind: self.scene_kind,
        };
        trace!(record_index = event.record_index, x, y, "hover entered");
        self.active_hover = Some(event);
        self.emit_event(ChartEvent::Hover(event));
    }

    fn publish_hover_clear(&mut self) {
        trace!("hover cleared");
        self.active_hover = None;
        self.emit_event(ChartEvent::HoverClear);
    }
}

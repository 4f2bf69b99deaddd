use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartContext, ChartEvent, ChartListener};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Registers a listener with unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn ChartListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.has_listener(&listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.id() == listener_id)
    }

    pub(super) fn listener_context(&self) -> ChartContext {
        ChartContext {
            viewport: self.config.viewport,
            record_count: self.series.len(),
            chart_kind: self.view.chart_kind,
            grid_visible: self.view.grid_visible,
            hovered_record: self.hover.active(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        let context = self.listener_context();
        for listener in &mut self.listeners {
            listener.on_event(&event, context);
        }
    }
}

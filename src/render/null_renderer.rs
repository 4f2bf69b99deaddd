use crate::error::ChartResult;
use crate::render::{Renderer, Scene};

/// Headless renderer used by tests and server-side engines.
///
/// It still validates every scene so invalid geometry is caught without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub clear_count: usize,
    pub render_count: usize,
    pub last_shape_count: usize,
    pub last_hover_target_count: usize,
}

impl Renderer for NullRenderer {
    fn clear(&mut self) -> ChartResult<()> {
        self.clear_count += 1;
        self.last_shape_count = 0;
        self.last_hover_target_count = 0;
        Ok(())
    }

    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_shape_count = scene.shape_count();
        self.last_hover_target_count = scene.hover_targets.len();
        Ok(())
    }
}

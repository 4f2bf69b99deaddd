mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;
mod svg_backend;

pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
    TextVAlign,
};
pub use scene::{HitShape, HoverTarget, MIN_HIT_HEIGHT_PX, Scene, SceneLayer};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// The engine owns its renderer exclusively. Every rebuild calls `clear`
/// first, then `render` with the new scene (skipped when there is nothing to
/// draw), so no geometry from an older frame can remain visible.
pub trait Renderer {
    fn clear(&mut self) -> ChartResult<()>;
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};

use tracing::{debug, trace, warn};

use crate::core::{ChartScales, Series, build_scales};
use crate::error::ChartResult;
use crate::extensions::{ChartEvent, ChartListener};
use crate::interaction::{ChartKind, HoverEvent, HoverState, ViewState};
use crate::render::{Renderer, Scene};

use super::{ChartEngineConfig, compose_scene};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series snapshot, the view state, the current scene
/// and the renderer. Any change to the series, chart kind or grid flag
/// invalidates the scene; it is rebuilt from scratch with fresh scales,
/// immediately when auto-render is on, otherwise on the next
/// [`ChartEngine::render_if_invalidated`].
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) series: Series,
    pub(super) view: ViewState,
    pub(super) scales: Option<ChartScales>,
    pub(super) scene: Scene,
    /// Kind the current scene was composed for; lags `view` until a rebuild.
    pub(super) scene_kind: ChartKind,
    pub(super) hover: HoverState,
    pub(super) active_hover: Option<HoverEvent>,
    pub(super) listeners: Vec<Box<dyn ChartListener>>,
    pub(super) invalidated: bool,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            auto_render = config.auto_render,
            "chart engine created"
        );
        Ok(Self {
            renderer,
            config,
            series: Series::empty(),
            view: ViewState::default(),
            scales: None,
            scene: Scene::empty(config.viewport),
            scene_kind: ChartKind::default(),
            hover: HoverState::default(),
            active_hover: None,
            listeners: Vec::new(),
            invalidated: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Scales of the current scene; `None` while nothing is drawn.
    #[must_use]
    pub fn scales(&self) -> Option<&ChartScales> {
        self.scales.as_ref()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Chart kind of the scene currently drawn.
    ///
    /// Differs from the view state's kind while a change awaits rendering.
    #[must_use]
    pub fn scene_chart_kind(&self) -> ChartKind {
        self.scene_kind
    }

    #[must_use]
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Rebuilds the scene from the current state and draws it.
    ///
    /// The renderer is always cleared first. On renderer failure the engine
    /// keeps an empty scene and returns the error.
    pub fn render(&mut self) -> ChartResult<()> {
        self.rebuild_scene();
        self.invalidated = false;
        if let Err(err) = self.draw_scene() {
            self.scene = Scene::empty(self.config.viewport);
            self.scales = None;
            return Err(err);
        }
        Ok(())
    }

    /// Renders once if anything changed since the last render.
    ///
    /// Returns `true` when a render happened.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if !self.invalidated {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Draws the current state into an external cairo context.
    ///
    /// Used by GTK draw callbacks; a pending invalidation is resolved first.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        if self.invalidated {
            self.rebuild_scene();
            self.invalidated = false;
        }
        self.renderer.render_on_cairo_context(context, &self.scene)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn invalidate(&mut self) {
        self.invalidated = true;
        if !self.config.auto_render {
            return;
        }
        if let Err(err) = self.render() {
            warn!(error = %err, "render failed; scene left empty");
        }
    }

    fn rebuild_scene(&mut self) {
        self.drop_hover();

        let scales = match build_scales(&self.series, self.config.viewport, self.config.margin) {
            Ok(scales) => scales,
            Err(err) => {
                warn!(error = %err, "skipping scene build due to invalid layout");
                None
            }
        };
        let scene = compose_scene(
            &self.series,
            scales.as_ref(),
            self.view.chart_kind,
            self.view.grid_visible,
            &self.config,
        );

        match scene {
            Ok(scene) => {
                self.scales = scales;
                self.scene = scene;
                self.scene_kind = self.view.chart_kind;
            }
            Err(err) => {
                warn!(error = %err, "scene composition failed; drawing nothing");
                self.scales = None;
                self.scene = Scene::empty(self.config.viewport);
            }
        }
    }

    fn draw_scene(&mut self) -> ChartResult<()> {
        self.renderer.clear()?;
        if self.scene.is_empty() {
            trace!("cleared chart surface");
            self.emit_event(ChartEvent::Cleared);
            return Ok(());
        }

        self.renderer.render(&self.scene)?;
        let shape_count = self.scene.shape_count();
        let hover_target_count = self.scene.hover_targets.len();
        trace!(
            shape_count,
            hover_target_count,
            chart_kind = %self.scene_kind,
            "rendered chart scene"
        );
        self.emit_event(ChartEvent::Rendered {
            shape_count,
            hover_target_count,
        });
        Ok(())
    }
}

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PriceRecord, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Primitives painted together in one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayer {
    pub kind: CanvasLayerKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl SceneLayer {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.rects.len() + self.lines.len() + self.paths.len() + self.circles.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }
}

/// Smallest height a rectangular hit area is given, in pixels.
pub const MIN_HIT_HEIGHT_PX: f64 = 6.0;

/// Pointer-sensitive area of a hoverable shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitShape {
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

impl HitShape {
    /// Rectangle hit area, grown vertically about its middle to at least
    /// [`MIN_HIT_HEIGHT_PX`] so flat bodies stay reachable.
    #[must_use]
    pub fn padded_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        if height >= MIN_HIT_HEIGHT_PX {
            return Self::Rect {
                x,
                y,
                width,
                height,
            };
        }
        Self::Rect {
            x,
            y: y + height / 2.0 - MIN_HIT_HEIGHT_PX / 2.0,
            width,
            height: MIN_HIT_HEIGHT_PX,
        }
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        match self {
            Self::Circle { cx, cy, radius } => {
                let dx = x - cx;
                let dy = y - cy;
                dx * dx + dy * dy <= radius * radius
            }
            Self::Rect {
                x: left,
                y: top,
                width,
                height,
            } => x >= left && x <= left + width && y >= top && y <= top + height,
        }
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        match self {
            Self::Circle { cx, cy, .. } => (cx, cy),
            Self::Rect {
                x,
                y,
                width,
                height,
            } => (x + width / 2.0, y + height / 2.0),
        }
    }
}

/// A shape that reacts to the pointer, bound to the record it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub record_index: usize,
    pub record: PriceRecord,
    pub shape: HitShape,
}

/// Backend-agnostic description of one rendered frame.
///
/// Layers are always present in [`CanvasLayerKind::CANONICAL_ORDER`]; an
/// empty scene simply has no primitives in any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub layers: Vec<SceneLayer>,
    pub hover_targets: Vec<HoverTarget>,
}

impl Scene {
    #[must_use]
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .iter()
                .copied()
                .map(SceneLayer::new)
                .collect(),
            hover_targets: Vec::new(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> &SceneLayer {
        &self.layers[kind.paint_index()]
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> &mut SceneLayer {
        &mut self.layers[kind.paint_index()]
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_path(&mut self, kind: CanvasLayerKind, path: PathPrimitive) {
        self.layer_mut(kind).paths.push(path);
    }

    pub fn push_circle(&mut self, kind: CanvasLayerKind, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    pub fn push_hover_target(&mut self, target: HoverTarget) {
        self.hover_targets.push(target);
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.layers.iter().map(SceneLayer::shape_count).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0 && self.hover_targets.is_empty()
    }

    /// Index of the hover target under the pointer.
    ///
    /// Overlapping targets resolve to the one whose center is nearest; equal
    /// distances resolve to the later (topmost) target.
    #[must_use]
    pub fn hover_target_index_at(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let candidates: SmallVec<[(OrderedFloat<f64>, usize); 4]> = self
            .hover_targets
            .iter()
            .enumerate()
            .filter(|(_, target)| target.shape.contains(x, y))
            .map(|(index, target)| {
                let (cx, cy) = target.shape.center();
                (OrderedFloat((x - cx).hypot(y - cy)), index)
            })
            .collect();

        candidates
            .into_iter()
            .min_by_key(|(distance, index)| (*distance, Reverse(*index)))
            .map(|(_, index)| index)
    }

    #[must_use]
    pub fn hover_target_at(&self, x: f64, y: f64) -> Option<&HoverTarget> {
        self.hover_target_index_at(x, y)
            .and_then(|index| self.hover_targets.get(index))
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;
        for layer in &self.layers {
            for rect in &layer.rects {
                rect.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for path in &layer.paths {
                path.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize scene: {e}")))
    }
}

use serde::{Deserialize, Serialize};

/// Scene layers, painted back to front in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Series,
    Axis,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Background, Self::Grid, Self::Series, Self::Axis];

    #[must_use]
    pub const fn paint_index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Grid => 1,
            Self::Series => 2,
            Self::Axis => 3,
        }
    }

    /// Stable lowercase name, used e.g. as SVG group class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Series => "series",
            Self::Axis => "axis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn paint_index_matches_canonical_order() {
        for (index, kind) in CanvasLayerKind::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(kind.paint_index(), index);
        }
    }
}

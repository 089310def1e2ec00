use crate::geometry::{Offset, RasterPoint, ScreenPoint};

/// Where the router is in a gesture, plus the anchors its deltas are
/// measured from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Panning {
        start: ScreenPoint,
        start_offset: Offset,
    },
    Drawing {
        dabs: usize,
    },
    Pinching {
        start_distance: f32,
        start_scale: f32,
        /// Raster point under the initial two-finger midpoint.
        anchor: RasterPoint,
    },
}

impl GestureState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning { .. } => "panning",
            Self::Drawing { .. } => "drawing",
            Self::Pinching { .. } => "pinching",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Panning and pinching hide the brush cursor.
    pub fn is_navigating(&self) -> bool {
        matches!(self, Self::Panning { .. } | Self::Pinching { .. })
    }
}

use serde::{Deserialize, Serialize};

use crate::geometry::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub space: bool,
}

impl Modifiers {
    pub const SPACE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        space: true,
    };

    /// Holding space turns a primary press into a pan.
    pub fn requests_pan(&self) -> bool {
        self.space
    }
}

/// Raw input delivered to the editor. Positions are relative to the
/// editor container, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        position: ScreenPoint,
        button: PointerButton,
        modifiers: Modifiers,
    },
    PointerMove {
        position: ScreenPoint,
    },
    PointerUp {
        position: ScreenPoint,
    },
    PointerLeave,
    /// `touches` holds every contact currently down.
    TouchStart {
        touches: Vec<ScreenPoint>,
    },
    TouchMove {
        touches: Vec<ScreenPoint>,
    },
    /// `touches` holds the contacts still down after the lift.
    TouchEnd {
        touches: Vec<ScreenPoint>,
    },
    Wheel {
        position: ScreenPoint,
        delta_y: f32,
    },
    /// Pointer capture was lost (window blur, alt-tab) without an up event.
    CaptureLost,
}

impl InputEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp { .. } => "pointer_up",
            Self::PointerLeave => "pointer_leave",
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd { .. } => "touch_end",
            Self::Wheel { .. } => "wheel",
            Self::CaptureLost => "capture_lost",
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::brush::BrushMode;
use crate::geometry::{ScreenPoint, Size, screen};
use crate::gesture::{InputEvent, Modifiers, PointerButton};

use super::{Result, ScriptError};

/// A recorded editing session: the container the editor was laid out in
/// and the inputs and toolbar commands, in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditScript {
    pub name: Option<String>,
    pub container: Size,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    Tool {
        mode: BrushMode,
    },
    Brush {
        #[serde(default)]
        size: Option<f32>,
        #[serde(default)]
        hardness: Option<f32>,
    },
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp {
        x: f32,
        y: f32,
    },
    PointerLeave,
    TouchStart {
        touches: Vec<ScreenPoint>,
    },
    TouchMove {
        touches: Vec<ScreenPoint>,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<ScreenPoint>,
    },
    Wheel {
        x: f32,
        y: f32,
        delta_y: f32,
    },
    CaptureLost,
    /// Press at `from`, `steps` evenly spaced moves ending on `to`, release.
    Drag {
        from: ScreenPoint,
        to: ScreenPoint,
        #[serde(default = "default_drag_steps")]
        steps: u32,
        #[serde(default)]
        button: PointerButton,
    },
    Undo,
    Redo,
    Reset,
    Fit,
}

/// Upper bound on the interpolated moves of a single drag.
pub const MAX_DRAG_STEPS: u32 = 10_000;

fn default_drag_steps() -> u32 {
    16
}

impl ScriptStep {
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Tool { .. } => "tool",
            Self::Brush { .. } => "brush",
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp { .. } => "pointer_up",
            Self::PointerLeave => "pointer_leave",
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd { .. } => "touch_end",
            Self::Wheel { .. } => "wheel",
            Self::CaptureLost => "capture_lost",
            Self::Drag { .. } => "drag",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Reset => "reset",
            Self::Fit => "fit",
        }
    }

    /// Expands the step into raw input events. Toolbar commands expand to
    /// nothing.
    pub fn events(&self) -> Vec<InputEvent> {
        match self {
            Self::PointerDown {
                x,
                y,
                button,
                modifiers,
            } => vec![InputEvent::PointerDown {
                position: screen(*x, *y),
                button: *button,
                modifiers: *modifiers,
            }],
            Self::PointerMove { x, y } => vec![InputEvent::PointerMove {
                position: screen(*x, *y),
            }],
            Self::PointerUp { x, y } => vec![InputEvent::PointerUp {
                position: screen(*x, *y),
            }],
            Self::PointerLeave => vec![InputEvent::PointerLeave],
            Self::TouchStart { touches } => vec![InputEvent::TouchStart {
                touches: touches.clone(),
            }],
            Self::TouchMove { touches } => vec![InputEvent::TouchMove {
                touches: touches.clone(),
            }],
            Self::TouchEnd { touches } => vec![InputEvent::TouchEnd {
                touches: touches.clone(),
            }],
            Self::Wheel { x, y, delta_y } => vec![InputEvent::Wheel {
                position: screen(*x, *y),
                delta_y: *delta_y,
            }],
            Self::CaptureLost => vec![InputEvent::CaptureLost],
            Self::Drag {
                from,
                to,
                steps,
                button,
            } => {
                let mut events = vec![InputEvent::PointerDown {
                    position: *from,
                    button: *button,
                    modifiers: Modifiers::default(),
                }];
                for step in 1..=*steps {
                    let t = step as f32 / *steps as f32;
                    events.push(InputEvent::PointerMove {
                        position: screen(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t),
                    });
                }
                events.push(InputEvent::PointerUp { position: *to });
                events
            }
            Self::Tool { .. } | Self::Brush { .. } | Self::Undo | Self::Redo | Self::Reset | Self::Fit => {
                Vec::new()
            }
        }
    }
}

impl EditScript {
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ScriptError::Parse(
                "edit script must include at least one step".to_string(),
            ));
        }
        if !(self.container.width.is_finite() && self.container.height.is_finite())
            || self.container.width < 0.0
            || self.container.height < 0.0
        {
            return Err(ScriptError::Parse(format!(
                "container size {}x{} is not a valid layout",
                self.container.width, self.container.height
            )));
        }
        for (index, step) in self.steps.iter().enumerate() {
            match step {
                ScriptStep::Drag { steps: 0, .. } => {
                    return Err(ScriptError::Parse(format!(
                        "drag at index {index} must move at least once"
                    )));
                }
                ScriptStep::Drag { steps, .. } if *steps > MAX_DRAG_STEPS => {
                    return Err(ScriptError::Parse(format!(
                        "drag at index {index} has {steps} steps, at most {MAX_DRAG_STEPS} allowed"
                    )));
                }
                ScriptStep::Brush {
                    size: None,
                    hardness: None,
                } => {
                    return Err(ScriptError::Parse(format!(
                        "brush step at index {index} sets neither size nor hardness"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

use crate::geometry::{Offset, RasterPoint, ScreenPoint};
use crate::viewport::{ViewportTransform, Zoom};

use super::{GestureState, InputEvent, PointerButton};

/// Two-finger spreads shorter than this keep the starting scale.
pub const MIN_PINCH_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    SetOffset(Offset),
    SetView { scale: f32, offset: Offset },
    ZoomAt { anchor: ScreenPoint, zoom: Zoom },
    Stroke(RasterPoint),
    /// The drawing gesture ended; record one history entry for it.
    CommitStroke,
    Hover(Option<ScreenPoint>),
}

/// Classifies raw pointer, touch and wheel input into pan, zoom and paint
/// actions.
///
/// The router never touches the viewport or the raster itself; it reads the
/// viewport to convert coordinates and returns actions for the session to
/// apply. A gesture only ends on an up/end event or on capture loss.
#[derive(Debug, Clone)]
pub struct GestureRouter {
    state: GestureState,
    wheel_sensitivity: f32,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new(0.001)
    }
}

impl GestureRouter {
    pub fn new(wheel_sensitivity: f32) -> Self {
        Self {
            state: GestureState::Idle,
            wheel_sensitivity,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Abandons the current gesture without committing anything.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    pub fn route(&mut self, event: &InputEvent, viewport: &ViewportTransform) -> Vec<GestureAction> {
        match event {
            InputEvent::PointerDown {
                position,
                button,
                modifiers,
            } => {
                if !self.state.is_idle() || !position.is_finite() {
                    return Vec::new();
                }
                match button {
                    PointerButton::Secondary => self.begin_pan(*position, viewport),
                    PointerButton::Primary if modifiers.requests_pan() => {
                        self.begin_pan(*position, viewport)
                    }
                    PointerButton::Primary => self.begin_draw(*position, viewport),
                    PointerButton::Middle => Vec::new(),
                }
            }
            InputEvent::PointerMove { position } => {
                if !position.is_finite() {
                    return Vec::new();
                }
                match &mut self.state {
                    GestureState::Idle => vec![GestureAction::Hover(Some(*position))],
                    GestureState::Panning {
                        start,
                        start_offset,
                    } => vec![GestureAction::SetOffset(Offset::new(
                        start_offset.x + position.x - start.x,
                        start_offset.y + position.y - start.y,
                    ))],
                    GestureState::Drawing { dabs } => {
                        *dabs += 1;
                        vec![
                            GestureAction::Stroke(viewport.to_raster(*position)),
                            GestureAction::Hover(Some(*position)),
                        ]
                    }
                    GestureState::Pinching { .. } => Vec::new(),
                }
            }
            InputEvent::PointerUp { position } => match self.state {
                GestureState::Drawing { .. } => self.finish_draw(),
                GestureState::Panning { .. } => {
                    self.state = GestureState::Idle;
                    if position.is_finite() {
                        vec![GestureAction::Hover(Some(*position))]
                    } else {
                        Vec::new()
                    }
                }
                GestureState::Idle | GestureState::Pinching { .. } => Vec::new(),
            },
            InputEvent::PointerLeave => {
                if self.state.is_idle() {
                    vec![GestureAction::Hover(None)]
                } else {
                    Vec::new()
                }
            }
            InputEvent::TouchStart { touches } => {
                if let [first, second, ..] = touches.as_slice() {
                    let mut actions = Vec::new();
                    if matches!(self.state, GestureState::Drawing { .. }) {
                        actions.push(GestureAction::CommitStroke);
                    }
                    actions.extend(self.begin_pinch(*first, *second, viewport));
                    return actions;
                }
                match touches.as_slice() {
                    [only] if self.state.is_idle() && only.is_finite() => {
                        self.begin_draw(*only, viewport)
                    }
                    _ => Vec::new(),
                }
            }
            InputEvent::TouchMove { touches } => match (self.state, touches.as_slice()) {
                (
                    GestureState::Pinching {
                        start_distance,
                        start_scale,
                        anchor,
                    },
                    [first, second, ..],
                ) => {
                    if !(first.is_finite() && second.is_finite()) {
                        return Vec::new();
                    }
                    let distance = first.distance(*second);
                    let midpoint = first.midpoint(*second);
                    let scale = if start_distance >= MIN_PINCH_DISTANCE {
                        viewport.clamp_scale(start_scale * distance / start_distance)
                    } else {
                        start_scale
                    };
                    vec![GestureAction::SetView {
                        scale,
                        offset: Offset::new(
                            midpoint.x - anchor.x * scale,
                            midpoint.y - anchor.y * scale,
                        ),
                    }]
                }
                (GestureState::Drawing { .. }, [first, ..]) if first.is_finite() => {
                    if let GestureState::Drawing { dabs } = &mut self.state {
                        *dabs += 1;
                    }
                    vec![GestureAction::Stroke(viewport.to_raster(*first))]
                }
                _ => Vec::new(),
            },
            InputEvent::TouchEnd { touches } => match self.state {
                GestureState::Drawing { .. } => self.finish_draw(),
                GestureState::Pinching { .. } if touches.len() < 2 => {
                    self.state = GestureState::Idle;
                    Vec::new()
                }
                _ => Vec::new(),
            },
            InputEvent::Wheel { position, delta_y } => {
                if !(position.is_finite() && delta_y.is_finite()) {
                    return Vec::new();
                }
                let scale = viewport.clamp_scale(viewport.scale() - delta_y * self.wheel_sensitivity);
                let mut actions = vec![GestureAction::ZoomAt {
                    anchor: *position,
                    zoom: Zoom::To(scale),
                }];
                if !self.state.is_navigating() {
                    actions.push(GestureAction::Hover(Some(*position)));
                }
                actions
            }
            InputEvent::CaptureLost => {
                let mut actions = match self.state {
                    GestureState::Drawing { dabs } => {
                        log::debug!("pointer capture lost mid-stroke after {dabs} dabs; committing");
                        self.finish_draw()
                    }
                    _ => {
                        self.state = GestureState::Idle;
                        Vec::new()
                    }
                };
                actions.push(GestureAction::Hover(None));
                actions
            }
        }
    }

    fn begin_pan(&mut self, position: ScreenPoint, viewport: &ViewportTransform) -> Vec<GestureAction> {
        self.state = GestureState::Panning {
            start: position,
            start_offset: viewport.offset(),
        };
        vec![GestureAction::Hover(None)]
    }

    fn begin_draw(&mut self, position: ScreenPoint, viewport: &ViewportTransform) -> Vec<GestureAction> {
        self.state = GestureState::Drawing { dabs: 1 };
        vec![
            GestureAction::Stroke(viewport.to_raster(position)),
            GestureAction::Hover(Some(position)),
        ]
    }

    fn begin_pinch(
        &mut self,
        first: ScreenPoint,
        second: ScreenPoint,
        viewport: &ViewportTransform,
    ) -> Vec<GestureAction> {
        if !(first.is_finite() && second.is_finite()) {
            self.state = GestureState::Idle;
            return Vec::new();
        }
        self.state = GestureState::Pinching {
            start_distance: first.distance(second),
            start_scale: viewport.scale(),
            anchor: viewport.to_raster(first.midpoint(second)),
        };
        vec![GestureAction::Hover(None)]
    }

    fn finish_draw(&mut self) -> Vec<GestureAction> {
        self.state = GestureState::Idle;
        vec![GestureAction::CommitStroke]
    }
}

use serde::{Deserialize, Serialize};

/// Horizontal extent of the comparison container, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpan {
    pub left: f32,
    pub width: f32,
}

/// Before/after slider. The "before" layer and the handle both sit at
/// `reveal_percent` of the container width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompareSlider {
    reveal_percent: f32,
    #[serde(skip)]
    dragging: bool,
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self {
            reveal_percent: 50.0,
            dragging: false,
        }
    }
}

/// `clamp((pointer_x - left) / width, 0, 1) * 100`, or `None` for a
/// container that has no width yet.
pub fn reveal_percent(pointer_x: f32, span: ContainerSpan) -> Option<f32> {
    if !(span.width.is_finite() && span.width > 0.0 && pointer_x.is_finite()) {
        return None;
    }
    Some(((pointer_x - span.left) / span.width).clamp(0.0, 1.0) * 100.0)
}

impl CompareSlider {
    pub fn reveal_percent(&self) -> f32 {
        self.reveal_percent
    }

    /// Width of the "before" layer as a fraction of the container.
    pub fn before_width_fraction(&self) -> f32 {
        self.reveal_percent / 100.0
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press_handle(&mut self) {
        self.dragging = true;
    }

    /// Follows the pointer while the handle is held.
    pub fn drag_to(&mut self, pointer_x: f32, span: ContainerSpan) -> bool {
        self.dragging && self.update(pointer_x, span)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Jumps to a click position, unless the click landed on the handle.
    pub fn click_at(&mut self, pointer_x: f32, span: ContainerSpan, on_handle: bool) -> bool {
        !on_handle && self.update(pointer_x, span)
    }

    /// Back to the centred split shown after edits are applied.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn update(&mut self, pointer_x: f32, span: ContainerSpan) -> bool {
        match reveal_percent(pointer_x, span) {
            Some(percent) => {
                self.reveal_percent = percent;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CompareSlider, ContainerSpan, reveal_percent};

    const SPAN: ContainerSpan = ContainerSpan {
        left: 20.0,
        width: 400.0,
    };

    #[test]
    fn percent_is_linear_and_clamped() {
        assert_eq!(reveal_percent(120.0, SPAN), Some(25.0));
        assert_eq!(reveal_percent(-30.0, SPAN), Some(0.0));
        assert_eq!(reveal_percent(900.0, SPAN), Some(100.0));
        assert_eq!(
            reveal_percent(
                5.0,
                ContainerSpan {
                    left: 0.0,
                    width: 0.0
                }
            ),
            None
        );
    }

    #[test]
    fn drag_requires_held_handle() {
        let mut slider = CompareSlider::default();
        assert!(!slider.drag_to(120.0, SPAN));
        assert_eq!(slider.reveal_percent(), 50.0);

        slider.press_handle();
        assert!(slider.drag_to(120.0, SPAN));
        assert_eq!(slider.reveal_percent(), 25.0);
        assert_eq!(slider.before_width_fraction(), 0.25);

        slider.release();
        assert!(!slider.drag_to(420.0, SPAN));
        assert_eq!(slider.reveal_percent(), 25.0);
    }

    #[test]
    fn click_jumps_except_on_handle() {
        let mut slider = CompareSlider::default();
        assert!(!slider.click_at(320.0, SPAN, true));
        assert_eq!(slider.reveal_percent(), 50.0);
        assert!(slider.click_at(320.0, SPAN, false));
        assert_eq!(slider.reveal_percent(), 75.0);

        slider.reset();
        assert_eq!(slider.reveal_percent(), 50.0);
    }
}

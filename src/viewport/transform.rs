use serde::{Deserialize, Serialize};

use crate::geometry::{Offset, RasterPoint, ScreenPoint, Size, raster, screen};

use super::{Result, ViewportError};

pub const DEFAULT_MIN_SCALE: f32 = 0.1;
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// How a zoom request changes the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zoom {
    By(f32),
    To(f32),
}

/// Affine mapping between container-relative screen pixels and raster
/// pixels: `screen = raster * scale + offset`.
///
/// The offset is never bounded, so the raster may be dragged fully out of
/// view. The scale always stays inside `[min_scale, max_scale]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    scale: f32,
    offset: Offset,
    min_scale: f32,
    max_scale: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
    }
}

impl ViewportTransform {
    pub fn new(min_scale: f32, max_scale: f32) -> Self {
        Self {
            scale: 1.0_f32.clamp(min_scale, max_scale),
            offset: Offset::default(),
            min_scale,
            max_scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn scale_limits(&self) -> (f32, f32) {
        (self.min_scale, self.max_scale)
    }

    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    pub fn to_raster(&self, point: ScreenPoint) -> RasterPoint {
        raster(
            (point.x - self.offset.x) / self.scale,
            (point.y - self.offset.y) / self.scale,
        )
    }

    pub fn to_screen(&self, point: RasterPoint) -> ScreenPoint {
        screen(
            point.x * self.scale + self.offset.x,
            point.y * self.scale + self.offset.y,
        )
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Rescales so that the raster point under `anchor` stays under `anchor`.
    /// Non-finite or non-positive targets are ignored.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, zoom: Zoom) {
        let target = match zoom {
            Zoom::By(factor) => self.scale * factor,
            Zoom::To(scale) => scale,
        };
        if !(target.is_finite() && target > 0.0 && anchor.is_finite()) {
            return;
        }

        let anchor_raster = self.to_raster(anchor);
        self.scale = self.clamp_scale(target);
        self.offset = Offset::new(
            anchor.x - anchor_raster.x * self.scale,
            anchor.y - anchor_raster.y * self.scale,
        );
    }

    pub fn set_view(&mut self, scale: f32, offset: Offset) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = self.clamp_scale(scale);
        }
        if offset.x.is_finite() && offset.y.is_finite() {
            self.offset = offset;
        }
    }

    pub fn set_offset(&mut self, offset: Offset) {
        self.set_view(self.scale, offset);
    }

    /// Largest scale that is at most 1 and keeps the raster inside
    /// `container * margin`, with the raster centred.
    pub fn fit_to_container(&mut self, container: Size, raster_size: Size, margin: f32) -> Result<()> {
        if !container.is_laid_out() {
            return Err(ViewportError::LayoutNotReady {
                width: container.width,
                height: container.height,
            });
        }
        if !raster_size.is_laid_out() {
            return Err(ViewportError::EmptyRaster {
                width: raster_size.width,
                height: raster_size.height,
            });
        }

        let fit = (container.width * margin / raster_size.width)
            .min(container.height * margin / raster_size.height)
            .min(1.0);
        self.scale = self.clamp_scale(fit);
        self.offset = Offset::new(
            (container.width - raster_size.width * self.scale) * 0.5,
            (container.height - raster_size.height * self.scale) * 0.5,
        );
        Ok(())
    }

    pub fn cursor_diameter(&self, radius: f32) -> f32 {
        radius * 2.0 * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportTransform, Zoom};
    use crate::geometry::{Offset, Size, raster, screen};
    use crate::viewport::ViewportError;

    fn approx(left: f32, right: f32) -> bool {
        (left - right).abs() < 1e-4
    }

    #[test]
    fn zoom_preserves_anchor_point() {
        let mut view = ViewportTransform::default();
        view.zoom_at(screen(100.0, 100.0), Zoom::To(2.0));
        assert!(approx(view.scale(), 2.0));
        assert!(approx(view.offset().x, -100.0));
        assert!(approx(view.offset().y, -100.0));
        let mapped = view.to_screen(raster(100.0, 100.0));
        assert!(approx(mapped.x, 100.0) && approx(mapped.y, 100.0));
    }

    #[test]
    fn anchor_survives_clamped_zoom() {
        let mut view = ViewportTransform::default();
        view.set_view(1.5, Offset::new(37.0, -12.0));
        let anchor = screen(250.0, 80.0);
        let before = view.to_raster(anchor);
        view.zoom_at(anchor, Zoom::By(100.0));
        assert!(approx(view.scale(), 5.0));
        let after = view.to_raster(anchor);
        assert!(approx(before.x, after.x) && approx(before.y, after.y));

        view.zoom_at(anchor, Zoom::To(0.0001));
        assert!(approx(view.scale(), 0.1));
    }

    #[test]
    fn raster_and_screen_are_inverse() {
        let mut view = ViewportTransform::default();
        view.set_view(0.4, Offset::new(12.5, 40.0));
        let point = screen(313.0, 77.0);
        let back = view.to_screen(view.to_raster(point));
        assert!(approx(back.x, point.x) && approx(back.y, point.y));
    }

    #[test]
    fn pan_is_unbounded() {
        let mut view = ViewportTransform::default();
        view.pan(-5000.0, 12000.0);
        assert_eq!(view.offset(), Offset::new(-5000.0, 12000.0));
    }

    #[test]
    fn fit_never_upscales_and_centres() {
        let mut view = ViewportTransform::default();
        view.fit_to_container(Size::new(800.0, 600.0), Size::new(100.0, 50.0), 0.85)
            .expect("fit");
        assert!(approx(view.scale(), 1.0));
        assert!(approx(view.offset().x, 350.0));
        assert!(approx(view.offset().y, 275.0));

        view.fit_to_container(Size::new(800.0, 600.0), Size::new(2000.0, 1000.0), 0.85)
            .expect("fit");
        assert!(approx(view.scale(), 0.34));
        assert!(approx(view.offset().x, 60.0));
        assert!(approx(view.offset().y, 130.0));
    }

    #[test]
    fn fit_defers_until_laid_out() {
        let mut view = ViewportTransform::default();
        view.pan(3.0, 4.0);
        let error = view
            .fit_to_container(Size::new(0.0, 600.0), Size::new(100.0, 100.0), 0.85)
            .expect_err("zero width");
        assert!(matches!(error, ViewportError::LayoutNotReady { .. }));
        assert_eq!(view.offset(), Offset::new(3.0, 4.0));
    }

    #[test]
    fn cursor_tracks_zoom() {
        let mut view = ViewportTransform::default();
        view.zoom_at(screen(0.0, 0.0), Zoom::To(2.5));
        assert!(approx(view.cursor_diameter(15.0), 75.0));
    }
}

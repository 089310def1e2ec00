use image::RgbaImage;

use crate::geometry::{PixelRect, RasterPoint};

use super::{BrushError, BrushMode, BrushSpec, Result};

/// Mask opacity of a soft erase dab at `distance` from its centre.
///
/// Fully opaque up to `inner`, linear down to zero at `radius`, zero beyond.
pub fn erase_mask_alpha(distance: f32, radius: f32, inner: f32) -> f32 {
    if distance >= radius {
        0.0
    } else if distance <= inner {
        1.0
    } else {
        ((radius - distance) / (radius - inner)).clamp(0.0, 1.0)
    }
}

/// Applies brush dabs to the working raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushEngine {
    spec: BrushSpec,
}

impl BrushEngine {
    pub fn new(spec: BrushSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &BrushSpec {
        &self.spec
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.spec.mode = mode;
    }

    /// Sets the toolbar size (diameter). Invalid sizes are rejected and the
    /// previous brush kept.
    pub fn set_size(&mut self, size: f32) -> Result<()> {
        let next = BrushSpec::from_size(self.spec.mode, size, self.spec.hardness)?;
        self.spec = next;
        Ok(())
    }

    pub fn set_hardness(&mut self, hardness: f32) -> Result<()> {
        let next = BrushSpec::new(self.spec.mode, self.spec.radius, hardness)?;
        self.spec = next;
        Ok(())
    }

    /// Stamps one dab centred at `at`.
    ///
    /// Returns the pixel rectangle that was visited, or `None` when the dab
    /// misses the raster. Every check runs before the first write, so an
    /// error leaves `working` untouched.
    pub fn apply_stroke(
        &self,
        working: &mut RgbaImage,
        source: &RgbaImage,
        at: RasterPoint,
    ) -> Result<Option<PixelRect>> {
        self.spec.validate()?;
        if !at.is_finite() {
            return Err(BrushError::NonFinitePoint { x: at.x, y: at.y });
        }
        if self.spec.mode == BrushMode::Restore && source.dimensions() != working.dimensions() {
            return Err(BrushError::SourceMismatch {
                source_width: source.width(),
                source_height: source.height(),
                working_width: working.width(),
                working_height: working.height(),
            });
        }

        let Some(rect) =
            PixelRect::around_disc(at, self.spec.radius, working.width(), working.height())
        else {
            return Ok(None);
        };

        match self.spec.mode {
            BrushMode::Erase => erase_dab(working, at, &self.spec, rect),
            BrushMode::Restore => restore_dab(working, source, at, self.spec.radius, rect),
        }
        Ok(Some(rect))
    }
}

// destination-out: dst.a = dst.a * (1 - mask.a), colour kept.
fn erase_dab(working: &mut RgbaImage, at: RasterPoint, spec: &BrushSpec, rect: PixelRect) {
    let inner = spec.inner_radius();
    for y in rect.min_y..rect.max_y {
        let dy = y as f32 - at.y;
        for x in rect.min_x..rect.max_x {
            let distance = (x as f32 - at.x).hypot(dy);
            let mask = erase_mask_alpha(distance, spec.radius, inner);
            if mask <= 0.0 {
                continue;
            }
            let pixel = working.get_pixel_mut(x, y);
            let alpha = f32::from(pixel[3]) * (1.0 - mask);
            pixel[3] = alpha.round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn restore_dab(
    working: &mut RgbaImage,
    source: &RgbaImage,
    at: RasterPoint,
    radius: f32,
    rect: PixelRect,
) {
    for y in rect.min_y..rect.max_y {
        let dy = y as f32 - at.y;
        for x in rect.min_x..rect.max_x {
            if (x as f32 - at.x).hypot(dy) <= radius {
                working.put_pixel(x, y, *source.get_pixel(x, y));
            }
        }
    }
}

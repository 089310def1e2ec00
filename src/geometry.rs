use serde::{Deserialize, Serialize};

/// A position in container-relative screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// A position in image pixels of the working raster.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RasterPoint {
    pub x: f32,
    pub y: f32,
}

/// Translation of the raster origin, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Half-open pixel rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

pub const fn screen(x: f32, y: f32) -> ScreenPoint {
    ScreenPoint { x, y }
}

pub const fn raster(x: f32, y: f32) -> RasterPoint {
    RasterPoint { x, y }
}

impl ScreenPoint {
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(self, other: ScreenPoint) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(self, other: ScreenPoint) -> ScreenPoint {
        screen((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl RasterPoint {
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    /// A size that can be divided by: both extents finite and positive.
    pub fn is_laid_out(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Pixel bounds of a disc, clipped to a `width` x `height` raster.
    /// `None` when the disc misses the raster entirely.
    pub fn around_disc(center: RasterPoint, radius: f32, width: u32, height: u32) -> Option<Self> {
        let min_x = (center.x - radius).floor().max(0.0);
        let min_y = (center.y - radius).floor().max(0.0);
        let max_x = ((center.x + radius).ceil() + 1.0).min(width as f32);
        let max_y = ((center.y + radius).ceil() + 1.0).min(height as f32);
        if min_x >= max_x || min_y >= max_y {
            return None;
        }
        Some(Self {
            min_x: min_x as u32,
            min_y: min_y as u32,
            max_x: max_x as u32,
            max_y: max_y as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelRect, Size, raster, screen};

    #[test]
    fn disc_bounds_are_clipped_to_raster() {
        let rect = PixelRect::around_disc(raster(2.0, 3.0), 5.0, 10, 10).expect("rect");
        assert_eq!(rect.min_x, 0);
        assert_eq!(rect.min_y, 0);
        assert_eq!(rect.max_x, 8);
        assert_eq!(rect.max_y, 9);
        assert!(PixelRect::around_disc(raster(-40.0, 3.0), 5.0, 10, 10).is_none());
    }

    #[test]
    fn zero_extent_is_not_laid_out() {
        assert!(!Size::new(0.0, 300.0).is_laid_out());
        assert!(!Size::new(f32::NAN, 300.0).is_laid_out());
        assert!(Size::new(1.0, 1.0).is_laid_out());
    }

    #[test]
    fn two_finger_geometry() {
        let a = screen(0.0, 0.0);
        let b = screen(6.0, 8.0);
        assert!((a.distance(b) - 10.0).abs() < f32::EPSILON);
        assert_eq!(a.midpoint(b), screen(3.0, 4.0));
    }
}

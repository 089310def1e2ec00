use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// How much of a raster the alpha channel keeps, drops or feathers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlphaCoverage {
    pub transparent: u64,
    pub partial: u64,
    pub opaque: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterInfo {
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
    pub coverage: AlphaCoverage,
}

pub fn alpha_coverage(image: &RgbaImage) -> AlphaCoverage {
    let mut coverage = AlphaCoverage::default();
    for pixel in image.pixels() {
        match pixel[3] {
            0 => coverage.transparent += 1,
            255 => coverage.opaque += 1,
            _ => coverage.partial += 1,
        }
    }
    coverage
}

pub fn raster_info(image: &RgbaImage) -> RasterInfo {
    RasterInfo {
        width: image.width(),
        height: image.height(),
        bytes: image.as_raw().len(),
        coverage: alpha_coverage(image),
    }
}

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::geometry::{Size, screen};
use crate::viewport::ViewportTransform;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Straight-alpha "source-over": `top` drawn on `bottom`.
pub fn source_over(top: Rgba<u8>, bottom: Rgba<u8>) -> Rgba<u8> {
    let top_alpha = f32::from(top[3]) / 255.0;
    let bottom_alpha = f32::from(bottom[3]) / 255.0 * (1.0 - top_alpha);
    let out_alpha = top_alpha + bottom_alpha;
    if out_alpha <= 0.0 {
        return TRANSPARENT;
    }
    let channel = |index: usize| {
        let value = (f32::from(top[index]) * top_alpha + f32::from(bottom[index]) * bottom_alpha)
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Draws the working raster through the viewport into a container-sized
/// frame, sampling the nearest raster pixel under each screen pixel centre.
///
/// With `ghost` set, the source raster is drawn underneath at that opacity
/// so restorable areas stay visible.
pub fn render_frame(
    working: &RgbaImage,
    source: &RgbaImage,
    viewport: &ViewportTransform,
    container: Size,
    ghost: Option<f32>,
) -> RgbaImage {
    let width = container.width.max(0.0).ceil() as u32;
    let height = container.height.max(0.0).ceil() as u32;
    let mut frame = RgbaImage::new(width, height);
    if width == 0 || height == 0 {
        return frame;
    }

    let ghost = ghost
        .filter(|opacity| *opacity > 0.0)
        .filter(|_| source.dimensions() == working.dimensions());
    let row_len = width as usize * 4;

    frame
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.chunks_exact_mut(4).enumerate() {
                let at = viewport.to_raster(screen(x as f32 + 0.5, y as f32 + 0.5));
                let (px, py) = (at.x.floor(), at.y.floor());
                if px < 0.0 || py < 0.0 || px >= working.width() as f32 || py >= working.height() as f32
                {
                    continue;
                }
                let (px, py) = (px as u32, py as u32);
                let top = *working.get_pixel(px, py);
                let pixel = match ghost {
                    Some(opacity) => {
                        let mut under = *source.get_pixel(px, py);
                        under[3] = (f32::from(under[3]) * opacity).round() as u8;
                        source_over(top, under)
                    }
                    None => top,
                };
                out.copy_from_slice(&pixel.0);
            }
        });
    frame
}

use std::fs;
use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use image::{DynamicImage, ImageFormat, RgbaImage};

use super::util::extension;
use super::{FormatError, Result};

pub fn supported_formats() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "webp"]
}

/// Decodes an encoded image (format sniffed from the bytes) into RGBA8.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory(bytes)?.to_rgba8();
    ensure_not_empty(image)
}

pub fn read_rgba(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let extension = extension(path)?;
    if !supported_formats().contains(&extension.as_str()) {
        return Err(FormatError::UnsupportedFormat(extension));
    }
    let bytes = fs::read(path)?;
    decode_rgba(&bytes)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    let mut cursor = Cursor::new(&mut encoded);
    DynamicImage::ImageRgba8(image.clone()).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(encoded)
}

pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64_STANDARD.encode(png))
}

pub fn write_png(path: impl AsRef<Path>, image: &RgbaImage) -> Result<()> {
    let path = path.as_ref();
    let extension = extension(path)?;
    if extension != "png" {
        return Err(FormatError::UnsupportedFormat(format!(
            "{extension} (edited masks are written as png)"
        )));
    }
    fs::write(path, encode_png(image)?)?;
    Ok(())
}

fn ensure_not_empty(image: RgbaImage) -> Result<RgbaImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(FormatError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(image)
}

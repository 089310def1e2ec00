use image::{ImageBuffer, Rgb, Rgba, RgbaImage};
use tempfile::tempdir;

use super::{
    AlphaCoverage, FormatError, alpha_coverage, decode_rgba, encode_png, png_data_url, read_rgba,
    write_png,
};

#[test]
fn png_keeps_alpha_through_encode_and_decode() {
    let mut image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
    image.put_pixel(1, 1, Rgba([1, 2, 3, 0]));
    image.put_pixel(2, 0, Rgba([4, 5, 6, 90]));
    let png = encode_png(&image).expect("encode");
    let decoded = decode_rgba(&png).expect("decode");
    assert_eq!(decoded.as_raw(), image.as_raw());
}

#[test]
fn rgb_input_is_promoted_to_opaque_rgba() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("source.jpg");
    let image = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(4, 4, Rgb([200, 10, 10]));
    image.save(&path).expect("save jpg");
    let decoded = read_rgba(&path).expect("read jpg");
    assert_eq!(decoded.dimensions(), (4, 4));
    assert!(decoded.pixels().all(|pixel| pixel[3] == 255));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let error = decode_rgba(b"definitely not an image").expect_err("must fail");
    assert!(matches!(error, FormatError::Image(_)));
}

#[test]
fn only_png_is_written() {
    let dir = tempdir().expect("tempdir");
    let image = RgbaImage::new(2, 2);
    let error = write_png(dir.path().join("mask.jpg"), &image).expect_err("jpg output");
    assert!(error.to_string().contains("png"));

    let path = dir.path().join("mask.png");
    write_png(&path, &image).expect("write png");
    assert_eq!(read_rgba(&path).expect("read back").dimensions(), (2, 2));
}

#[test]
fn data_url_carries_png_payload() {
    let png = encode_png(&RgbaImage::new(1, 1)).expect("encode");
    let url = png_data_url(&png);
    assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn coverage_counts_alpha_classes() {
    let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    image.put_pixel(1, 0, Rgba([0, 0, 0, 128]));
    assert_eq!(
        alpha_coverage(&image),
        AlphaCoverage {
            transparent: 1,
            partial: 1,
            opaque: 2,
        }
    );
}

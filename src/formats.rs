mod api;
mod error;
mod inspect;
mod util;

#[cfg(test)]
mod tests;

pub use api::{decode_rgba, encode_png, png_data_url, read_rgba, supported_formats, write_png};
pub use error::{FormatError, Result};
pub use inspect::{AlphaCoverage, RasterInfo, alpha_coverage, raster_info};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewportError>;

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("container is not laid out yet ({width}x{height})")]
    LayoutNotReady { width: f32, height: f32 },

    #[error("raster has no pixels ({width}x{height})")]
    EmptyRaster { width: f32, height: f32 },
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrushError>;

#[derive(Debug, Error, PartialEq)]
pub enum BrushError {
    #[error("brush radius must be finite and positive, found {0}")]
    InvalidRadius(f32),

    #[error("brush hardness must be in [0, 1], found {0}")]
    InvalidHardness(f32),

    #[error("stroke position is not finite: ({x}, {y})")]
    NonFinitePoint { x: f32, y: f32 },

    #[error(
        "source raster is {source_width}x{source_height} but working raster is {working_width}x{working_height}"
    )]
    SourceMismatch {
        source_width: u32,
        source_height: u32,
        working_width: u32,
        working_height: u32,
    },
}

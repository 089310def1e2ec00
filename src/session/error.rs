use thiserror::Error;

use crate::brush::BrushError;
use crate::config::ConfigError;
use crate::formats::FormatError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Processed,
    Source,
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processed => write!(f, "processed image"),
            Self::Source => write!(f, "source image"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not load the {asset}: {error}")]
    AssetLoad {
        asset: Asset,
        #[source]
        error: FormatError,
    },

    #[error("the {0} has no pixels")]
    EmptyRaster(Asset),

    #[error("brush failure: {0}")]
    Brush(#[from] BrushError),

    #[error("editor configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("could not export the edited image: {0}")]
    Export(#[source] FormatError),
}

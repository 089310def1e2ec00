use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::formats::AlphaCoverage;
use crate::geometry::Size;
use crate::viewport::ViewportTransform;

#[derive(Debug, Parser)]
#[command(
    name = "retouch",
    version,
    about = "Manual mask correction for background-removed images"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the size and alpha coverage of an image.
    Info { input: PathBuf },
    /// Prints the viewport that fits an image into a container.
    Fit {
        input: PathBuf,
        #[arg(long)]
        width: f32,
        #[arg(long)]
        height: f32,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Replays an edit script over a processed image and writes the result.
    Edit {
        #[arg(long)]
        processed: PathBuf,
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Also write the result as a `data:image/png;base64,...` URI.
        #[arg(long)]
        data_url: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct ImageInfo {
    pub(super) path: String,
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) bytes: usize,
    pub(super) coverage: AlphaCoverage,
}

#[derive(Debug, Serialize)]
pub(super) struct FitInfo {
    pub(super) raster: Size,
    pub(super) container: Size,
    pub(super) viewport: ViewportTransform,
}

use std::fs;
use std::path::Path;

use clap::Parser;

use crate::config::{EditorConfig, load_config};
use crate::formats::{raster_info, read_rgba, write_png};
use crate::geometry::Size;
use crate::script::{load_script, run_script, save_report};
use crate::session::EditorSession;
use crate::viewport::ViewportTransform;

use super::types::{Cli, Commands, FitInfo, ImageInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => {
            let image = read_rgba(&input).map_err(|error| error.to_string())?;
            let raster = raster_info(&image);
            let info = ImageInfo {
                path: input.display().to_string(),
                width: raster.width,
                height: raster.height,
                bytes: raster.bytes,
                coverage: raster.coverage,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Fit {
            input,
            width,
            height,
            config,
        } => {
            let config = read_config(config.as_deref())?;
            let image = read_rgba(&input).map_err(|error| error.to_string())?;
            let raster = Size::from_pixels(image.width(), image.height());
            let container = Size::new(width, height);
            let mut viewport = ViewportTransform::new(config.min_scale, config.max_scale);
            viewport
                .fit_to_container(container, raster, config.fit_margin)
                .map_err(|error| error.to_string())?;
            let info = FitInfo {
                raster,
                container,
                viewport,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Edit {
            processed,
            source,
            script,
            output,
            report,
            config,
            data_url,
        } => {
            let config = read_config(config.as_deref())?;
            let script = load_script(&script).map_err(|error| error.to_string())?;
            let session = EditorSession::enter_files(&processed, &source, config)
                .map_err(|error| error.to_string())?;
            let (session, run_report) =
                run_script(&script, session).map_err(|error| error.to_string())?;
            let applied = session.apply().map_err(|error| error.to_string())?;
            write_png(&output, &applied.image).map_err(|error| error.to_string())?;
            if let Some(path) = data_url {
                fs::write(path, &applied.data_url).map_err(|error| error.to_string())?;
            }
            if let Some(report_path) = report {
                save_report(report_path, &run_report).map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&run_report).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}

fn read_config(path: Option<&Path>) -> Result<EditorConfig, String> {
    match path {
        Some(path) => load_config(path).map_err(|error| error.to_string()),
        None => Ok(EditorConfig::default()),
    }
}

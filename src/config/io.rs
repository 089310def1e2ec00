use std::fs;
use std::path::Path;

use super::{EditorConfig, Result};

pub fn load_config(path: impl AsRef<Path>) -> Result<EditorConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let config = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<EditorConfig>(&raw)?
    } else {
        serde_json::from_str::<EditorConfig>(&raw)?
    };
    config.validate()?;
    log::debug!("loaded editor config from {}", path.display());
    Ok(config)
}

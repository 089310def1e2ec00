use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE};

use super::{ConfigError, Result};

/// Tunable constants of the mask editor.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of full-raster snapshots kept for undo/redo.
    /// Memory cost is `history_capacity * width * height * 4` bytes.
    pub history_capacity: usize,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Fraction of the container the raster may occupy after a fit.
    pub fit_margin: f32,
    /// Scale change per wheel delta unit.
    pub wheel_sensitivity: f32,
    /// Brush diameter in raster pixels.
    pub brush_size: f32,
    pub brush_hardness: f32,
    /// Opacity of the source image drawn under the working raster while
    /// the restore tool is active.
    pub ghost_opacity: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            fit_margin: 0.85,
            wheel_sensitivity: 0.001,
            brush_size: 30.0,
            brush_hardness: 0.8,
            ghost_opacity: 0.3,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_scale must be positive, found {}",
                self.min_scale
            )));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return Err(ConfigError::Invalid(format!(
                "max_scale {} must be >= min_scale {}",
                self.max_scale, self.min_scale
            )));
        }
        if !(self.fit_margin > 0.0 && self.fit_margin <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "fit_margin must be in (0, 1], found {}",
                self.fit_margin
            )));
        }
        if !(self.wheel_sensitivity.is_finite() && self.wheel_sensitivity >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "wheel_sensitivity must be non-negative, found {}",
                self.wheel_sensitivity
            )));
        }
        if !(self.brush_size.is_finite() && self.brush_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "brush_size must be positive, found {}",
                self.brush_size
            )));
        }
        if !(0.0..=1.0).contains(&self.brush_hardness) {
            return Err(ConfigError::Invalid(format!(
                "brush_hardness must be in [0, 1], found {}",
                self.brush_hardness
            )));
        }
        if !(0.0..=1.0).contains(&self.ghost_opacity) {
            return Err(ConfigError::Invalid(format!(
                "ghost_opacity must be in [0, 1], found {}",
                self.ghost_opacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::EditorConfig;
    use crate::config::load_config;

    #[test]
    fn defaults_are_valid() {
        let config = EditorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_capacity, 20);
    }

    #[test]
    fn yaml_overrides_only_named_keys() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("editor.yaml");
        fs::write(&path, "history_capacity: 5\nbrush_size: 64\n").expect("write config");
        let config = load_config(&path).expect("load config");
        assert_eq!(config.history_capacity, 5);
        assert!((config.brush_size - 64.0).abs() < f32::EPSILON);
        assert!((config.max_scale - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn inverted_scale_bounds_are_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("editor.json");
        fs::write(&path, r#"{"min_scale": 2.0, "max_scale": 1.0}"#).expect("write config");
        let error = load_config(&path).expect_err("must fail");
        assert!(error.to_string().contains("max_scale"));
    }
}

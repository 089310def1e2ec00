use serde::{Deserialize, Serialize};

use super::{BrushError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    /// Removes alpha from the working raster with a soft falloff.
    #[default]
    Erase,
    /// Copies source pixels back inside a hard-edged circle.
    Restore,
}

impl BrushMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Erase => "erase",
            Self::Restore => "restore",
        }
    }
}

/// Shape of a single brush dab, in raster pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSpec {
    pub mode: BrushMode,
    pub radius: f32,
    /// Fraction of the radius that stays fully opaque before the falloff.
    pub hardness: f32,
}

impl BrushSpec {
    pub fn new(mode: BrushMode, radius: f32, hardness: f32) -> Result<Self> {
        let spec = Self {
            mode,
            radius,
            hardness,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Builds a spec from a toolbar size, which is a diameter.
    pub fn from_size(mode: BrushMode, size: f32, hardness: f32) -> Result<Self> {
        Self::new(mode, size * 0.5, hardness)
    }

    pub fn size(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn inner_radius(&self) -> f32 {
        self.radius * self.hardness
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BrushError::InvalidRadius(self.radius));
        }
        if !(0.0..=1.0).contains(&self.hardness) {
            return Err(BrushError::InvalidHardness(self.hardness));
        }
        Ok(())
    }
}

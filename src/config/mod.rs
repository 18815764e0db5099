use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ChartError;
use crate::utils::paths::{self, ensure_dir};

const TMP_SUFFIX: &str = "tmp";

/// How a sector label is rotated relative to the sector's angular midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrientation {
    /// Text runs along the arc, perpendicular to the radius.
    #[default]
    Tangent,
    /// Text runs outward along the radius.
    Radial,
}

/// Tunable drawing and sizing constants for the pie chart view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub min_size_dp: i32,
    pub density: f32,
    pub radius_fraction: f32,
    pub text_size_fraction: f32,
    pub label_threshold_deg: f64,
    pub label_radius_fraction: f32,
    pub label_max_chars: usize,
    pub label_keep_chars: usize,
    pub label_orientation: LabelOrientation,
    pub center_disc_fraction: f32,
    pub start_angle_deg: f64,
    pub currency_suffix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_size_dp: 400,
            density: 1.0,
            radius_fraction: 0.3,
            text_size_fraction: 0.1,
            label_threshold_deg: 10.0,
            label_radius_fraction: 0.6,
            label_max_chars: 10,
            label_keep_chars: 8,
            label_orientation: LabelOrientation::Tangent,
            center_disc_fraction: 0.2,
            start_angle_deg: -90.0,
            currency_suffix: "RUB".into(),
            dataset_path: None,
        }
    }
}

impl ChartConfig {
    /// Minimum view side in pixels.
    pub fn min_size_px(&self) -> i32 {
        (self.min_size_dp as f32 * self.density) as i32
    }

    /// Rejects values that would make layout meaningless.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.min_size_dp < 0 {
            return Err(invalid("min_size_dp must not be negative"));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(invalid("density must be a positive number"));
        }
        for (name, value) in [
            ("radius_fraction", self.radius_fraction),
            ("text_size_fraction", self.text_size_fraction),
            ("label_radius_fraction", self.label_radius_fraction),
            ("center_disc_fraction", self.center_disc_fraction),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(invalid(format!("{name} must be in (0, 1], got {value}")));
            }
        }
        if self.radius_fraction > 0.5 {
            return Err(invalid("radius_fraction above 0.5 would overflow the view"));
        }
        if !self.label_threshold_deg.is_finite() || self.label_threshold_deg < 0.0 {
            return Err(invalid("label_threshold_deg must be a non-negative number"));
        }
        if !self.start_angle_deg.is_finite() {
            return Err(invalid("start_angle_deg must be finite"));
        }
        if self.label_keep_chars > self.label_max_chars {
            return Err(invalid("label_keep_chars must not exceed label_max_chars"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ChartError {
    ChartError::InvalidInput(message.into())
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ChartError> {
        Self::from_base(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ChartError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, ChartError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    /// Loads the saved configuration, falling back to defaults when none exists.
    pub fn load(&self) -> Result<ChartConfig, ChartError> {
        if !self.path.exists() {
            return Ok(ChartConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: ChartConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &ChartConfig) -> Result<(), ChartError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ChartError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

//! Main FieldConfig: load, parse, validate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::sampling::SamplingSection;
use super::session::SessionSection;

/// Full screening configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct FieldConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Session timing settings
    #[serde(default)]
    pub session: SessionSection,

    /// Sampling strategy settings
    #[serde(default)]
    pub sampling: SamplingSection,
}

impl FieldConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/config.yaml), falling
    /// back to built-in defaults when the file does not exist
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the parsed values
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.grid.size == 0 {
            return Err(ConfigLoadError::Validation(
                "grid.size must be at least 1".to_string(),
            ));
        }
        if self.session.response_window_ms == 0 {
            return Err(ConfigLoadError::Validation(
                "session.response_window_ms must be positive".to_string(),
            ));
        }
        let s = &self.sampling;
        if s.min_radius > s.max_radius {
            return Err(ConfigLoadError::Validation(format!(
                "sampling.min_radius ({}) exceeds max_radius ({})",
                s.min_radius, s.max_radius
            )));
        }
        if s.radius_step <= 0.0 {
            return Err(ConfigLoadError::Validation(
                "sampling.radius_step must be positive".to_string(),
            ));
        }
        if s.fine_step <= 0.0 || s.sweep_advance <= 0.0 {
            return Err(ConfigLoadError::Validation(
                "sampling sweep steps must be positive".to_string(),
            ));
        }
        if s.scan_iterations == 0 {
            return Err(ConfigLoadError::Validation(
                "sampling.scan_iterations must be at least 1".to_string(),
            ));
        }
        if s.boundary_bucket_width <= 0.0 || s.boundary_tolerance < 0.0 {
            return Err(ConfigLoadError::Validation(
                "boundary bucket width must be positive and tolerance non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

use serde::Deserialize;

use crate::error::ConfigError;
use crate::manager::DEFAULT_COLOUR;

/// Page-level settings. Every field is optional in the JSON form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub scale_step: f64,
    /// Stroke colours handed to visitors in turn.
    pub palette: Vec<String>,
    /// URL of the floorplan drawn behind the canvas.
    pub background: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 300.0,
            canvas_height: 300.0,
            min_scale: 1.0,
            max_scale: 5.0,
            scale_step: 0.01,
            palette: vec![DEFAULT_COLOUR.to_string()],
            background: "drawing.svg".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !(positive(self.canvas_width) && positive(self.canvas_height)) {
            return Err(ConfigError::Invalid(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !positive(self.scale_step) {
            return Err(ConfigError::Invalid(format!(
                "scale_step must be positive, got {}",
                self.scale_step
            )));
        }
        let bounded = positive(self.min_scale)
            && self.max_scale.is_finite()
            && self.min_scale <= self.max_scale;
        if !bounded {
            return Err(ConfigError::Invalid(format!(
                "scale bounds must be finite with 0 < min <= max, got [{}, {}]",
                self.min_scale, self.max_scale
            )));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette is empty".to_string()));
        }
        Ok(())
    }

    pub fn base_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }
}

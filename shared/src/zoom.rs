use crate::config::Config;
use crate::error::ConfigError;
use crate::gesture::PointerSample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Only Ctrl+wheel zooms; a plain wheel scrolls the page.
    pub fn from_wheel(ctrl: bool, delta_y: f64) -> Option<Self> {
        if !ctrl {
            return None;
        }
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "i" => Some(Self::In),
            "o" => Some(Self::Out),
            _ => None,
        }
    }
}

/// Where the canvas and the floorplan go after a zoom, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    scale: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::from_valid_config(&Config::default())
    }
}

impl Zoom {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// `config` must already have passed [`Config::validate`].
    pub(crate) fn from_valid_config(config: &Config) -> Self {
        Self {
            scale: config.min_scale,
            min: config.min_scale,
            max: config.max_scale,
            step: config.scale_step,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Moves one step and reports whether the scale changed.
    pub fn apply(&mut self, direction: ZoomDirection) -> bool {
        let target = match direction {
            ZoomDirection::In => self.scale + self.step,
            ZoomDirection::Out => self.scale - self.step,
        };
        // Snap to the step grid so repeated steps don't drift.
        let snapped = ((target / self.step).round() * self.step).clamp(self.min, self.max);
        if (snapped - self.scale).abs() < self.step / 2.0 {
            return false;
        }
        self.scale = snapped;
        true
    }

    /// Resizes from `current` to `base * scale`, shifting so the pixel under
    /// `anchor` stays where it was on screen.
    pub fn layout(&self, base: (f64, f64), current: (f64, f64), anchor: &PointerSample) -> Layout {
        let (width, height) = current;
        let new_width = base.0 * self.scale;
        let new_height = base.1 * self.scale;
        let left_shift = shift(anchor.x, width, new_width);
        let top_shift = shift(anchor.y, height, new_height);
        Layout {
            width: new_width,
            height: new_height,
            left: anchor.rect.left - left_shift,
            top: anchor.rect.top - top_shift,
        }
    }
}

fn shift(position: f64, size: f64, new_size: f64) -> f64 {
    if size <= 0.0 {
        return 0.0;
    }
    (position / size) * (new_size - size)
}

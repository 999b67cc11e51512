mod config;
mod error;
mod gesture;
mod manager;
mod path;
mod surface;
mod zoom;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{ConfigError, DrawError, GestureError};
pub use gesture::{Effect, GestureMode, InputEvent, PointerSample, Rect, Session, Target};
pub use manager::PathManager;
pub use path::{Path, PathGroup};
pub use surface::Surface;
pub use zoom::{Layout, Zoom, ZoomDirection};

/// A pointer sample stored as fractions of the canvas size, so it survives
/// any resize of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        Self { x, y, timestamp }.clamp()
    }

    /// Normalizes a canvas-relative pixel position against the current
    /// canvas size.
    pub fn from_pixels(x: f64, y: f64, width: f64, height: f64, timestamp: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        Some(Self::new(x / width, y / height, timestamp))
    }

    pub fn clamp(self) -> Self {
        Self {
            x: clamp_unit(self.x),
            y: clamp_unit(self.y),
            timestamp: self.timestamp,
        }
    }

    pub fn to_pixels(self, width: f64, height: f64) -> (f64, f64) {
        (self.x * width, self.y * height)
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.max(0.0).min(1.0)
}

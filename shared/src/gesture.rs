use crate::config::Config;
use crate::error::{ConfigError, GestureError};
use crate::manager::PathManager;
use crate::surface::Surface;
use crate::zoom::{Layout, Zoom, ZoomDirection};
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    Draw,
    Move,
}

impl GestureMode {
    pub fn label(self) -> &'static str {
        match self {
            GestureMode::Draw => "draw",
            GestureMode::Move => "move",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            GestureMode::Draw => GestureMode::Move,
            GestureMode::Move => GestureMode::Draw,
        }
    }
}

/// Which element a pointer event landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Canvas,
    Other,
}

/// A bounding client rect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The pointer position relative to the canvas rect at the time of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
    pub inside: bool,
}

impl PointerSample {
    pub fn from_client(client_x: f64, client_y: f64, rect: Rect) -> Self {
        let inside = rect.left < client_x
            && rect.left + rect.width > client_x
            && rect.top < client_y
            && rect.top + rect.height > client_y;
        Self {
            x: client_x - rect.left,
            y: client_y - rect.top,
            rect,
            inside,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown {
        target: Target,
        sample: PointerSample,
        timestamp: f64,
    },
    PointerMove {
        target: Target,
        sample: PointerSample,
        timestamp: f64,
    },
    PointerUp,
    Wheel {
        ctrl: bool,
        delta_y: f64,
    },
    Key {
        key: String,
    },
    /// Continuous-line checkbox.
    Toggle(bool),
    NewVisitor,
    SwitchMode,
}

/// What the page has to do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    None,
    Drew,
    /// The surface was resized and redrawn; move the canvas and floorplan.
    Relayout(Layout),
    ModeChanged(GestureMode),
}

/// All drawing state for one page load.
#[derive(Debug)]
pub struct Session {
    manager: PathManager,
    zoom: Zoom,
    mode: GestureMode,
    continuous: bool,
    last_pointer: PointerSample,
    base_size: (f64, f64),
}

impl Default for Session {
    fn default() -> Self {
        Self::from_valid_config(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &Config) -> Self {
        Self {
            manager: PathManager::new(config.palette.clone()),
            zoom: Zoom::from_valid_config(config),
            mode: GestureMode::Draw,
            continuous: false,
            last_pointer: PointerSample::default(),
            base_size: config.base_size(),
        }
    }

    pub fn manager(&self) -> &PathManager {
        &self.manager
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    pub fn continuous(&self) -> bool {
        self.continuous
    }

    pub fn last_pointer(&self) -> &PointerSample {
        &self.last_pointer
    }

    pub fn base_size(&self) -> (f64, f64) {
        self.base_size
    }

    pub fn dispatch(
        &mut self,
        event: InputEvent,
        surface: &mut impl Surface,
    ) -> Result<Effect, GestureError> {
        match event {
            InputEvent::PointerDown {
                target,
                sample,
                timestamp,
            } => {
                self.last_pointer = sample;
                if self.mode != GestureMode::Draw
                    || !self.manager.has_groups()
                    || target != Target::Canvas
                {
                    return Ok(Effect::None);
                }
                let Some(point) = self.sample_point(&sample, timestamp, surface) else {
                    return Ok(Effect::None);
                };
                self.manager.add_path(self.continuous)?;
                self.manager.add_point(point, surface)?;
                Ok(Effect::Drew)
            }
            InputEvent::PointerMove {
                target,
                sample,
                timestamp,
            } => {
                self.last_pointer = sample;
                if self.mode != GestureMode::Draw || !self.manager.is_drawing() {
                    return Ok(Effect::None);
                }
                if target != Target::Canvas {
                    self.manager.end_path();
                    return Ok(Effect::None);
                }
                let Some(point) = self.sample_point(&sample, timestamp, surface) else {
                    return Ok(Effect::None);
                };
                self.manager.add_point(point, surface)?;
                Ok(Effect::Drew)
            }
            InputEvent::PointerUp => {
                self.manager.end_path();
                Ok(Effect::None)
            }
            InputEvent::Wheel { ctrl, delta_y } => match ZoomDirection::from_wheel(ctrl, delta_y) {
                Some(direction) => Ok(self.apply_zoom(direction, surface)),
                None => Ok(Effect::None),
            },
            InputEvent::Key { key } => {
                if !self.last_pointer.inside {
                    return Ok(Effect::None);
                }
                match ZoomDirection::from_key(&key) {
                    Some(direction) => Ok(self.apply_zoom(direction, surface)),
                    None => Ok(Effect::None),
                }
            }
            InputEvent::Toggle(continuous) => {
                self.continuous = continuous;
                Ok(Effect::None)
            }
            InputEvent::NewVisitor => {
                self.manager.add_path_group();
                Ok(Effect::None)
            }
            InputEvent::SwitchMode => {
                self.manager.end_path();
                self.mode = self.mode.toggled();
                Ok(Effect::ModeChanged(self.mode))
            }
        }
    }

    fn sample_point(
        &self,
        sample: &PointerSample,
        timestamp: f64,
        surface: &impl Surface,
    ) -> Option<Point> {
        let (width, height) = surface.size();
        Point::from_pixels(sample.x, sample.y, width, height, timestamp)
    }

    fn apply_zoom(&mut self, direction: ZoomDirection, surface: &mut impl Surface) -> Effect {
        if !self.zoom.apply(direction) {
            return Effect::None;
        }
        let layout = self
            .zoom
            .layout(self.base_size, surface.size(), &self.last_pointer);
        log::debug!(
            "Zoom {direction:?} scale={:.2} size={}x{}",
            self.zoom.scale(),
            layout.width,
            layout.height
        );
        surface.resize(layout.width, layout.height);
        self.manager.redraw_all(surface);
        self.follow_layout(&layout);
        Effect::Relayout(layout)
    }

    // The canvas moved under a pointer that did not; re-express the last
    // sample against the new rect so the next zoom anchors on the same spot.
    fn follow_layout(&mut self, layout: &Layout) {
        let sample = &self.last_pointer;
        let client_x = sample.rect.left + sample.x;
        let client_y = sample.rect.top + sample.y;
        self.last_pointer = PointerSample::from_client(
            client_x,
            client_y,
            Rect {
                left: layout.left,
                top: layout.top,
                width: layout.width,
                height: layout.height,
            },
        );
    }
}

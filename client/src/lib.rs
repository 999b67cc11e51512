mod app;
mod dom;
mod logging;
mod render;
mod state;

pub use app::run;
pub use render::CanvasSurface;

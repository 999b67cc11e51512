/// A 2D drawing target addressed in pixels.
///
/// Resizing a surface clears it, the same way a canvas drops its pixel
/// buffer when its width or height is assigned.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    fn set_stroke_colour(&mut self, colour: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

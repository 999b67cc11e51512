use crate::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(f64, f64),
    Clear,
    Colour(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

pub type Segment = ((f64, f64), (f64, f64));

/// Surface that keeps every call so tests can assert on what was drawn.
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Stroked segments since the last clear, in draw order.
    pub fn segments(&self) -> Vec<Segment> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Clear | Op::Resize(..)))
            .map(|index| index + 1)
            .unwrap_or(0);
        let mut segments = Vec::new();
        let mut from = None;
        let mut pending = None;
        for op in &self.ops[start..] {
            match op {
                Op::MoveTo(x, y) => from = Some((*x, *y)),
                Op::LineTo(x, y) => pending = from.map(|from| (from, (*x, *y))),
                Op::Stroke => {
                    if let Some(segment) = pending.take() {
                        segments.push(segment);
                    }
                }
                Op::BeginPath => {
                    from = None;
                    pending = None;
                }
                _ => {}
            }
        }
        segments
    }

    pub fn colours(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Colour(colour) => Some(colour.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.ops.push(Op::Resize(width, height));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn set_stroke_colour(&mut self, colour: &str) {
        self.ops.push(Op::Colour(colour.to_string()));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}

pub fn assert_segments_close(actual: &[Segment], expected: &[Segment]) {
    assert_eq!(actual.len(), expected.len(), "segments: {actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        for (got, want) in [(a.0 .0, e.0 .0), (a.0 .1, e.0 .1), (a.1 .0, e.1 .0), (a.1 .1, e.1 .1)] {
            assert!((got - want).abs() < 1e-9, "segments: {actual:?}, expected {expected:?}");
        }
    }
}

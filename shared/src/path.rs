use crate::Point;

/// One pointer-down to pointer-up stroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    /// The first point joins the final point of the path before this one
    /// in the same group.
    pub continues_previous: bool,
}

impl Path {
    pub fn new(continues_previous: bool) -> Self {
        Self {
            points: Vec::new(),
            continues_previous,
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn final_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Everything drawn during one visitor's session.
#[derive(Clone, Debug, PartialEq)]
pub struct PathGroup {
    pub paths: Vec<Path>,
    pub colour: String,
}

impl PathGroup {
    pub fn new(colour: String) -> Self {
        Self {
            paths: Vec::new(),
            colour,
        }
    }

    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// The point a path at `index` starts from, if it joins its predecessor.
    pub fn join_point(&self, index: usize) -> Option<Point> {
        let path = self.paths.get(index)?;
        if !path.continues_previous || index == 0 {
            return None;
        }
        self.paths[index - 1].final_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_point_is_previous_final_point() {
        let mut group = PathGroup::new("#1f1f1f".to_string());
        let mut first = Path::new(false);
        first.add_point(Point::new(0.1, 0.2, 0.0));
        first.add_point(Point::new(0.3, 0.4, 1.0));
        group.add_path(first);
        group.add_path(Path::new(true));
        group.add_path(Path::new(false));

        assert_eq!(group.join_point(0), None);
        assert_eq!(group.join_point(1), Some(Point::new(0.3, 0.4, 1.0)));
        assert_eq!(group.join_point(2), None);
        assert_eq!(group.join_point(3), None);
    }
}

use crate::error::DrawError;
use crate::path::{Path, PathGroup};
use crate::surface::Surface;
use crate::Point;

pub const DEFAULT_COLOUR: &str = "#1f1f1f";

/// The stroke currently receiving points.
#[derive(Clone, Copy, Debug)]
struct ActiveStroke {
    group: usize,
    path: usize,
    last: Option<Point>,
}

/// Owns every group drawn since page load and turns their normalized points
/// into pixel segments on a [`Surface`].
#[derive(Debug, Default)]
pub struct PathManager {
    groups: Vec<PathGroup>,
    palette: Vec<String>,
    current_group: Option<usize>,
    active: Option<ActiveStroke>,
}

impl PathManager {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    pub fn groups(&self) -> &[PathGroup] {
        &self.groups
    }

    pub fn current_group(&self) -> Option<&PathGroup> {
        self.current_group.and_then(|index| self.groups.get(index))
    }

    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Number of segments a full redraw issues.
    pub fn segment_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| &group.paths)
            .map(|path| path.points.len())
            .sum()
    }

    /// Starts a new visitor. Later paths go into this group.
    pub fn add_path_group(&mut self) {
        let colour = if self.palette.is_empty() {
            DEFAULT_COLOUR.to_string()
        } else {
            self.palette[self.groups.len() % self.palette.len()].clone()
        };
        log::info!("New visitor group={} colour={colour}", self.groups.len());
        self.groups.push(PathGroup::new(colour));
        self.current_group = Some(self.groups.len() - 1);
        self.active = None;
    }

    /// Opens a path in the current group. It only joins the previous path
    /// when asked to and when there is a previous path to join.
    pub fn add_path(&mut self, continues_previous: bool) -> Result<(), DrawError> {
        let group_index = self.current_group.ok_or(DrawError::NoPathGroup)?;
        let group = &mut self.groups[group_index];
        let continues = continues_previous && !group.paths.is_empty();
        group.add_path(Path::new(continues));
        let path_index = group.paths.len() - 1;
        self.active = Some(ActiveStroke {
            group: group_index,
            path: path_index,
            last: group.join_point(path_index),
        });
        log::debug!("Path start group={group_index} path={path_index} continues={continues}");
        Ok(())
    }

    /// Appends to the active path and draws the segment leading to `point`.
    /// The first point of a fresh path draws as a zero-length segment.
    pub fn add_point(&mut self, point: Point, surface: &mut impl Surface) -> Result<(), DrawError> {
        let active = self.active.as_mut().ok_or(DrawError::NoActivePath)?;
        let group = &mut self.groups[active.group];
        group.paths[active.path].add_point(point);
        let from = active.last.unwrap_or(point);
        active.last = Some(point);
        draw_segment(surface, &group.colour, from, point);
        Ok(())
    }

    pub fn end_path(&mut self) {
        if let Some(active) = self.active.take() {
            log::debug!("Path end group={} path={}", active.group, active.path);
        }
    }

    /// Clears the surface and draws every segment again at its current size.
    pub fn redraw_all(&self, surface: &mut impl Surface) {
        surface.clear();
        for group in &self.groups {
            for (index, path) in group.paths.iter().enumerate() {
                let mut previous = group.join_point(index);
                for point in &path.points {
                    let from = previous.unwrap_or(*point);
                    draw_segment(surface, &group.colour, from, *point);
                    previous = Some(*point);
                }
            }
        }
    }
}

fn draw_segment(surface: &mut impl Surface, colour: &str, from: Point, to: Point) {
    let (width, height) = surface.size();
    let (from_x, from_y) = from.to_pixels(width, height);
    let (to_x, to_y) = to.to_pixels(width, height);
    surface.set_stroke_colour(colour);
    surface.begin_path();
    surface.move_to(from_x, from_y);
    surface.line_to(to_x, to_y);
    surface.stroke();
}

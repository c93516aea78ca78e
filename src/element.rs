use egui::{Pos2, Rect};

use crate::geometry::{self, Tolerance};
use crate::rough::{Drawable, RoughGenerator, RoughOptions};

/// Shape kinds that are drawn by dragging on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTool {
    Line,
    Rectangle,
}

/// The geometric primitive an element represents
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line,
    Rectangle,
    Text { value: String },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Line => "line",
            Shape::Rectangle => "rectangle",
            Shape::Text { .. } => "text",
        }
    }
}

impl From<ShapeTool> for Shape {
    fn from(tool: ShapeTool) -> Self {
        match tool {
            ShapeTool::Line => Shape::Line,
            ShapeTool::Rectangle => Shape::Rectangle,
        }
    }
}

/// A shape on the board with its two corner points.
///
/// For lines `p1`/`p2` are the endpoints; for rectangles and text they are
/// opposite corners of the box. Corners may be unordered while a gesture is
/// in progress.
#[derive(Debug, Clone)]
pub struct Element {
    id: usize,
    p1: Pos2,
    p2: Pos2,
    shape: Shape,
    drawable: Option<Drawable>,
}

impl Element {
    pub fn new(id: usize, shape: Shape, p1: Pos2, p2: Pos2, rough: &RoughOptions) -> Self {
        let mut element = Self {
            id,
            p1,
            p2,
            shape,
            drawable: None,
        };
        element.rebuild_drawable(rough);
        element
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn p1(&self) -> Pos2 {
        self.p1
    }

    pub fn p2(&self) -> Pos2 {
        self.p2
    }

    pub fn corners(&self) -> (Pos2, Pos2) {
        (self.p1, self.p2)
    }

    /// The cached hand-drawn renderable. `None` for text.
    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        match &self.shape {
            Shape::Text { value } => Some(value),
            _ => None,
        }
    }

    /// Axis-aligned box spanned by the corners, whatever their order
    pub fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.p1, self.p2)
    }

    /// Body test without handles: inside the box, or near the segment for lines
    pub fn contains(&self, pos: Pos2, tolerance: &Tolerance) -> bool {
        match self.shape {
            Shape::Line => geometry::distance_to_segment(pos, self.p1, self.p2) <= tolerance.line,
            Shape::Rectangle | Shape::Text { .. } => self.bounds().contains(pos),
        }
    }

    /// Replace both corners and regenerate the renderable
    pub fn set_corners(&mut self, p1: Pos2, p2: Pos2, rough: &RoughOptions) {
        self.p1 = p1;
        self.p2 = p2;
        self.rebuild_drawable(rough);
    }

    fn rebuild_drawable(&mut self, rough: &RoughOptions) {
        let mut generator = RoughGenerator::for_element(self.id, rough);
        self.drawable = match self.shape {
            Shape::Line => Some(generator.line(self.p1, self.p2, rough)),
            Shape::Rectangle => Some(generator.rectangle(self.p1, self.p2 - self.p1, rough)),
            Shape::Text { .. } => None,
        };
    }
}

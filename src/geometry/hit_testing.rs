use egui::{CursorIcon, Pos2};

use crate::element::{Element, Shape};

/// Where a pointer touches an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Inside a rectangle or text box
    Inside,
    /// On the body of a line
    OnLine,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// First endpoint of a line
    Start,
    /// Second endpoint of a line
    End,
}

impl Position {
    /// True for resize handles, false for body hits
    pub fn is_handle(&self) -> bool {
        !matches!(self, Position::Inside | Position::OnLine)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Inside => "inside",
            Position::OnLine => "on_line",
            Position::TopLeft => "top_left",
            Position::TopRight => "top_right",
            Position::BottomLeft => "bottom_left",
            Position::BottomRight => "bottom_right",
            Position::Start => "start",
            Position::End => "end",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Position::Inside | Position::OnLine => CursorIcon::AllScroll,
            Position::TopRight | Position::BottomLeft | Position::Start => CursorIcon::ResizeNeSw,
            Position::TopLeft | Position::BottomRight | Position::End => CursorIcon::ResizeNwSe,
        }
    }
}

/// Pixel tolerances used by hit-testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Half-extent of the square box around a handle
    pub handle_size: f32,
    /// Max distance from a line segment
    pub line: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            handle_size: 10.0,
            line: 10.0,
        }
    }
}

/// True when `pos` lies strictly within `size` of `corner` on both axes
pub fn is_near(pos: Pos2, corner: Pos2, size: f32) -> bool {
    (pos.x - corner.x).abs() < size && (pos.y - corner.y).abs() < size
}

pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let len_sq = segment.length_sq();
    if len_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(segment) / len_sq).clamp(0.0, 1.0);
    point.distance(start + segment * t)
}

/// Classify where `pos` touches `element`. Handles win over the body.
pub fn position_within(pos: Pos2, element: &Element, tolerance: &Tolerance) -> Option<Position> {
    let (p1, p2) = element.corners();
    let near = |corner: Pos2| is_near(pos, corner, tolerance.handle_size);

    match element.shape() {
        Shape::Line => {
            if near(p1) {
                Some(Position::Start)
            } else if near(p2) {
                Some(Position::End)
            } else if element.contains(pos, tolerance) {
                Some(Position::OnLine)
            } else {
                None
            }
        }
        Shape::Rectangle => {
            let corners = [
                (Pos2::new(p1.x, p1.y), Position::TopLeft),
                (Pos2::new(p2.x, p1.y), Position::TopRight),
                (Pos2::new(p1.x, p2.y), Position::BottomLeft),
                (Pos2::new(p2.x, p2.y), Position::BottomRight),
            ];
            corners
                .iter()
                .find(|(corner, _)| near(*corner))
                .map(|(_, handle)| *handle)
                .or_else(|| element.contains(pos, tolerance).then_some(Position::Inside))
        }
        Shape::Text { .. } => element.contains(pos, tolerance).then_some(Position::Inside),
    }
}

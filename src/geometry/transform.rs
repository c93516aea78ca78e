use egui::{Pos2, Vec2, pos2};

use crate::element::{Element, Shape};
use crate::error::BoardError;

use super::Position;

/// Translate `element` so its first corner sits at `pointer - offset`.
///
/// `offset` is the pointer position minus `p1` captured when the element was
/// grabbed. The vector from `p1` to `p2` is kept as is.
pub fn moved(element: &Element, pointer: Pos2, offset: Vec2) -> (Pos2, Pos2) {
    let (p1, p2) = element.corners();
    let new_p1 = pointer - offset;
    (new_p1, new_p1 + (p2 - p1))
}

/// Move the coordinates controlled by `handle` to `pointer`, holding the
/// opposite corner fixed.
pub fn resized(element: &Element, pointer: Pos2, handle: Position) -> Result<(Pos2, Pos2), BoardError> {
    let (p1, p2) = element.corners();
    match (element.shape(), handle) {
        (Shape::Rectangle, Position::TopLeft) | (Shape::Line, Position::Start) => Ok((pointer, p2)),
        (Shape::Rectangle, Position::BottomRight) | (Shape::Line, Position::End) => Ok((p1, pointer)),
        (Shape::Rectangle, Position::TopRight) => Ok((pos2(p1.x, pointer.y), pos2(pointer.x, p2.y))),
        (Shape::Rectangle, Position::BottomLeft) => Ok((pos2(pointer.x, p1.y), pos2(p2.x, pointer.y))),
        (shape, position) => Err(BoardError::HandleMismatch {
            shape: shape.name(),
            position,
        }),
    }
}

/// Canonical corner order, applied once a gesture ends.
///
/// Rectangles get `p1` as the min corner and `p2` as the max corner. Line
/// endpoints are swapped when `p2` comes first by x, then y; the segment
/// itself does not change. Text is returned as is.
pub fn normalized(element: &Element) -> (Pos2, Pos2) {
    let (p1, p2) = element.corners();
    match element.shape() {
        Shape::Rectangle => (p1.min(p2), p1.max(p2)),
        Shape::Line => {
            if p2.x < p1.x || (p2.x == p1.x && p2.y < p1.y) {
                (p2, p1)
            } else {
                (p1, p2)
            }
        }
        Shape::Text { .. } => (p1, p2),
    }
}

use egui::Pos2;

use crate::element::{Element, Shape};
use crate::error::BoardError;
use crate::geometry::{Position, Tolerance, position_within};
use crate::rough::RoughOptions;

/// Ordered list of elements on the board.
///
/// Elements are only ever appended, so an element's id is its index.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new element and return its id
    pub fn add(&mut self, shape: Shape, p1: Pos2, p2: Pos2, rough: &RoughOptions) -> usize {
        let id = self.elements.len();
        self.elements.push(Element::new(id, shape, p1, p2, rough));
        id
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: usize) -> Result<&Element, BoardError> {
        self.elements.get(id).ok_or(BoardError::UnknownElement(id))
    }

    pub fn get_mut(&mut self, id: usize) -> Result<&mut Element, BoardError> {
        self.elements.get_mut(id).ok_or(BoardError::UnknownElement(id))
    }

    /// First element (in insertion order) under `pos`, with where it was hit
    pub fn element_at(&self, pos: Pos2, tolerance: &Tolerance) -> Option<(usize, Position)> {
        self.elements
            .iter()
            .find_map(|element| position_within(pos, element, tolerance).map(|hit| (element.id(), hit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut doc = Document::new();
        let rough = RoughOptions::default();
        assert_eq!(doc.add(Shape::Line, pos2(0.0, 0.0), pos2(10.0, 10.0), &rough), 0);
        assert_eq!(doc.add(Shape::Rectangle, pos2(0.0, 0.0), pos2(10.0, 10.0), &rough), 1);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(1).unwrap().id(), 1);
        assert_eq!(doc.get(2).unwrap_err(), BoardError::UnknownElement(2));
    }

    #[test]
    fn test_element_at_returns_first_hit() {
        let mut doc = Document::new();
        let rough = RoughOptions::default();
        doc.add(Shape::Rectangle, pos2(0.0, 0.0), pos2(100.0, 100.0), &rough);
        doc.add(Shape::Rectangle, pos2(20.0, 20.0), pos2(80.0, 80.0), &rough);

        let tolerance = Tolerance::default();
        assert_eq!(doc.element_at(pos2(50.0, 50.0), &tolerance), Some((0, Position::Inside)));
        assert_eq!(doc.element_at(pos2(300.0, 300.0), &tolerance), None);
    }
}

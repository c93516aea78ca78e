// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::document::Document;
use crate::element::Shape;

/// A target the board can be painted onto.
///
/// Coordinates passed in are canvas-local; implementations map them to
/// whatever space they draw in.
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Stroke one polyline of a hand-drawn shape
    fn stroke_path(&mut self, points: &[Pos2]);

    /// Draw `text` with its top-left corner at `pos`
    fn text(&mut self, pos: Pos2, text: &str);
}

/// Repaints the whole document onto a [`Surface`] on every call.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn paint(&self, document: &Document, surface: &mut dyn Surface) {
        surface.clear();
        for element in document.elements() {
            match element.shape() {
                Shape::Text { value } => surface.text(element.p1(), value),
                Shape::Line | Shape::Rectangle => {
                    if let Some(drawable) = element.drawable() {
                        for stroke in &drawable.strokes {
                            surface.stroke_path(stroke);
                        }
                    }
                }
            }
        }
    }
}

/// Paints onto an egui painter clipped to the canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    canvas: Rect,
    background: Color32,
    stroke: Stroke,
    font: FontId,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, canvas: Rect, stroke_width: f32, font_size: f32) -> Self {
        Self {
            painter,
            canvas,
            background: Color32::from_rgb(173, 216, 230), // light blue
            stroke: Stroke::new(stroke_width, Color32::BLACK),
            font: FontId::proportional(font_size),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.canvas.min.to_vec2()
    }

    pub fn origin(&self) -> Vec2 {
        self.canvas.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.canvas, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::line(points, self.stroke));
    }

    fn text(&mut self, pos: Pos2, text: &str) {
        self.painter.text(
            self.to_screen(pos),
            Align2::LEFT_TOP,
            text,
            self.font.clone(),
            self.stroke.color,
        );
    }
}

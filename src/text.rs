use egui::{Color32, FontId};

/// Measures rendered text so text elements get a bounding box.
pub trait TextMeasure {
    /// Width in points of the widest line of `text`
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Measures with the egui font system, matching what the canvas paints.
pub struct EguiTextMeasure {
    ctx: egui::Context,
}

impl EguiTextMeasure {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl TextMeasure for EguiTextMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), Color32::BLACK)
                .size()
                .x
        })
    }
}

/// Every character advances by a fixed fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    pub advance: f32,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        let widest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        widest as f32 * self.advance * font_size
    }
}

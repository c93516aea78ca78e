use eframe::egui;
use crate::state::Tool;

const BUTTON_SIZE: f32 = 32.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(100, 181, 246);

/// Square toolbar button showing a tool's icon
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::Vec2::splat(BUTTON_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let (fill, icon_color) = match (self.selected, response.hovered()) {
                (true, _) => (ACCENT, egui::Color32::BLACK),
                (false, true) => (egui::Color32::from_rgb(30, 30, 120), egui::Color32::WHITE),
                (false, false) => (egui::Color32::from_rgb(0, 0, 139), egui::Color32::WHITE),
            };

            painter.rect_filled(rect, 4.0, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                icon_color,
            );
            if self.selected {
                painter.rect_stroke(rect, 4.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
            }
        }

        response.on_hover_text(self.tool.name())
    }
}

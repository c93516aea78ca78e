use crate::SketchApp;
use crate::text::EguiTextMeasure;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input
            app.handle_input(ctx, canvas_rect);

            // Render the canvas
            app.paint(&painter, canvas_rect);

            if response.hovered() || app.editor().selection().is_some() {
                let hover = response.hover_pos().map(|pos| pos - canvas_rect.min.to_vec2());
                ctx.set_cursor_icon(app.editor().cursor_icon(hover));
            }

            text_entry(app, ctx, canvas_rect);
        });
}

/// Floating text box for the text tool; committed when it loses focus.
fn text_entry(app: &mut SketchApp, ctx: &egui::Context, canvas_rect: egui::Rect) {
    let font_size = app.editor().config().font_size;
    let mut lost_focus = false;

    if let Some(entry) = app.editor_mut().text_entry_mut() {
        egui::Area::new(egui::Id::new("text_entry"))
            .fixed_pos(entry.anchor + canvas_rect.min.to_vec2())
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(&mut entry.value)
                        .font(egui::FontId::proportional(font_size))
                        .text_color(egui::Color32::BLACK)
                        .frame(false)
                        .desired_rows(1)
                        .desired_width(240.0),
                );
                if entry.wants_focus {
                    response.request_focus();
                    entry.wants_focus = false;
                }
                lost_focus = response.lost_focus();
            });
    }

    if lost_focus {
        let measure = EguiTextMeasure::new(ctx);
        if let Err(err) = app.editor_mut().commit_text(&measure) {
            log::error!("Failed to commit text: {err}");
        }
    }
}

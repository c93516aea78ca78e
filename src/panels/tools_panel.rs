use crate::SketchApp;
use crate::components::ToolButton;
use crate::state::Tool;

const TOOLBAR_FILL: egui::Color32 = egui::Color32::from_rgb(0, 0, 139);

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel")
        .resizable(false)
        .frame(egui::Frame::default().fill(TOOLBAR_FILL).inner_margin(6.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let active = app.active_tool();
                let mut clicked = None;

                for tool in Tool::ALL {
                    if ToolButton::new(tool, active == Some(tool)).show(ui).clicked() {
                        clicked = Some(tool);
                    }
                }

                if let Some(tool) = clicked {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.select_tool(tool);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        egui::Color32::WHITE,
                        format!(
                            "{} · {} shapes",
                            app.editor().action().name(),
                            app.editor().document().len()
                        ),
                    );
                });
            });
        });
}

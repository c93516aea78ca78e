use crate::config::BoardConfig;
use crate::editor::Editor;
use crate::input::{InputHandler, route_event};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::{PainterSurface, Renderer};
use crate::state::Tool;

pub struct SketchApp {
    editor: Editor,
    renderer: Renderer,
    input: InputHandler,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    /// Build the app without a window, e.g. for tests
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            editor: Editor::new(config),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.editor.action().tool()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.editor.select_tool(tool);
    }

    /// Feed this frame's pointer input on `canvas_rect` to the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            if let Err(err) = route_event(&event, &mut self.editor) {
                log::error!("Dropped {:?}: {}", event, err);
            }
        }
    }

    pub fn paint(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let config = self.editor.config();
        let mut surface =
            PainterSurface::new(painter, canvas_rect, config.stroke_width, config.font_size);
        self.renderer.paint(self.editor.document(), &mut surface);
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

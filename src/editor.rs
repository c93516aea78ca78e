use egui::{CursorIcon, Pos2, Vec2, vec2};

use crate::config::BoardConfig;
use crate::document::Document;
use crate::element::{Shape, ShapeTool};
use crate::error::BoardError;
use crate::geometry::{self, Position, Tolerance};
use crate::state::{Action, Selection, TextEntry, Tool};
use crate::text::TextMeasure;

/// Applies toolbar, pointer and text events to the document.
///
/// All coordinates are canvas-local. Every method runs synchronously on the
/// UI thread; the only suspended state is a pending [`TextEntry`], resumed
/// when the UI calls [`Editor::commit_text`].
#[derive(Debug)]
pub struct Editor {
    config: BoardConfig,
    tolerance: Tolerance,
    document: Document,
    action: Action,
    selection: Option<Selection>,
    text_entry: Option<TextEntry>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Editor {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            tolerance: config.tolerance(),
            config,
            document: Document::new(),
            action: Action::None,
            selection: None,
            text_entry: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn text_entry(&self) -> Option<&TextEntry> {
        self.text_entry.as_ref()
    }

    pub fn text_entry_mut(&mut self) -> Option<&mut TextEntry> {
        self.text_entry.as_mut()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        let action = Action::for_tool(tool);
        log::info!("Tool selected: {} ({} -> {})", tool.name(), self.action.name(), action.name());
        self.action = action;
        self.selection = None;
    }

    pub fn pointer_down(&mut self, pos: Pos2) -> Result<(), BoardError> {
        match self.action {
            Action::Selecting => {
                if let Some((id, position)) = self.document.element_at(pos, &self.tolerance) {
                    let element = self.document.get(id)?;
                    self.action = Action::for_hit(position);
                    self.selection = Some(Selection {
                        id,
                        offset: pos - element.p1(),
                        position,
                    });
                    log::debug!("Grabbed element {} at {} -> {}", id, position.as_str(), self.action.name());
                }
            }
            Action::Drawing(kind) => {
                let id = self.document.add(kind.into(), pos, pos, &self.config.rough);
                let position = match kind {
                    ShapeTool::Line => Position::End,
                    ShapeTool::Rectangle => Position::BottomRight,
                };
                self.selection = Some(Selection {
                    id,
                    offset: Vec2::ZERO,
                    position,
                });
                log::debug!("Started {:?} element {}", kind, id);
            }
            Action::Writing if self.text_entry.is_none() => {
                log::debug!("Opening text box at {:?}", pos);
                self.text_entry = Some(TextEntry::new(pos));
            }
            Action::Writing | Action::None | Action::Moving | Action::Resizing => {}
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, pos: Pos2) -> Result<(), BoardError> {
        let selection = match (self.action, self.selection) {
            (Action::Moving | Action::Resizing | Action::Drawing(_), Some(selection)) => selection,
            (Action::Moving | Action::Resizing, None) => {
                return Err(BoardError::NoSelection {
                    action: self.action.name(),
                });
            }
            _ => return Ok(()),
        };

        let element = self.document.get(selection.id)?;
        let (p1, p2) = match self.action {
            Action::Moving => geometry::moved(element, pos, selection.offset),
            _ => geometry::resized(element, pos, selection.position)?,
        };
        self.document
            .get_mut(selection.id)?
            .set_corners(p1, p2, &self.config.rough);
        Ok(())
    }

    pub fn pointer_up(&mut self) -> Result<(), BoardError> {
        if let Some(selection) = self.selection.take() {
            let element = self.document.get(selection.id)?;
            let (p1, p2) = geometry::normalized(element);
            self.document
                .get_mut(selection.id)?
                .set_corners(p1, p2, &self.config.rough);
            log::debug!("Released element {} at {:?}-{:?}", selection.id, p1, p2);
        }

        let action = self.action.after_release(self.config.repeat_draw);
        if action != self.action {
            log::debug!("{} -> {}", self.action.name(), action.name());
            self.action = action;
        }
        Ok(())
    }

    /// Turn the pending text box into a text element.
    ///
    /// Returns the new element's id, or `None` when the text was empty and
    /// the box was discarded.
    pub fn commit_text(&mut self, measure: &dyn TextMeasure) -> Result<Option<usize>, BoardError> {
        let entry = self.text_entry.take().ok_or(BoardError::NoTextEntry)?;
        if entry.value.is_empty() {
            log::debug!("Discarding empty text box");
            return Ok(None);
        }

        let width = measure.width(&entry.value, self.config.font_size);
        let lines = entry.value.lines().count().max(1);
        let size = vec2(width, self.config.text_height * lines as f32);
        let id = self.document.add(
            Shape::Text { value: entry.value },
            entry.anchor,
            entry.anchor + size,
            &self.config.rough,
        );
        log::info!("Added text element {}", id);
        Ok(Some(id))
    }

    /// Cursor for the canvas: the grabbed handle's cursor, or whatever the
    /// pointer hovers over while selecting.
    pub fn cursor_icon(&self, hover: Option<Pos2>) -> CursorIcon {
        if let Some(selection) = &self.selection {
            if matches!(self.action, Action::Moving | Action::Resizing) {
                return selection.position.cursor_icon();
            }
        }
        match (self.action, hover) {
            (Action::Selecting, Some(pos)) => self
                .document
                .element_at(pos, &self.tolerance)
                .map_or(CursorIcon::Default, |(_, position)| position.cursor_icon()),
            (Action::Drawing(_), _) => CursorIcon::Crosshair,
            (Action::Writing, _) => CursorIcon::Text,
            _ => CursorIcon::Default,
        }
    }
}

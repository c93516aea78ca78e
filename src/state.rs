//! Interaction state machine.
//!
//! ```text
//!   toolbar            pointer down on a body       pointer up
//!  ─────────► Selecting ───────────────────► Moving ─────────► Selecting
//!                  │     pointer down on a handle         pointer up
//!                  └───────────────────────► Resizing ───────► Selecting
//!
//!   toolbar                  pointer up (repeat_draw)
//!  ─────────► Drawing(kind) ───────────────────────► Drawing(kind)
//!
//!   toolbar              blur commits the text box
//!  ─────────► Writing ─────────────────────────────► Writing
//! ```
//!
//! The transitions here are pure; [`crate::Editor`] applies them.

use egui::{Pos2, Vec2};

use crate::element::ShapeTool;
use crate::geometry::Position;

/// Toolbar choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Selection,
    Line,
    Rectangle,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Selection, Tool::Line, Tool::Rectangle, Tool::Text];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Selection => "Selection",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Text => "Text",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Selection => "🖱",
            Tool::Line => "📏",
            Tool::Rectangle => "◻",
            Tool::Text => "🔤",
        }
    }
}

/// What the canvas is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    None,
    Selecting,
    Drawing(ShapeTool),
    Moving,
    Resizing,
    Writing,
}

impl Action {
    pub fn for_tool(tool: Tool) -> Self {
        match tool {
            Tool::Selection => Action::Selecting,
            Tool::Line => Action::Drawing(ShapeTool::Line),
            Tool::Rectangle => Action::Drawing(ShapeTool::Rectangle),
            Tool::Text => Action::Writing,
        }
    }

    /// Action entered when a pointer-down in `Selecting` hits `position`
    pub fn for_hit(position: Position) -> Self {
        if position.is_handle() {
            Action::Resizing
        } else {
            Action::Moving
        }
    }

    pub fn after_release(self, repeat_draw: bool) -> Self {
        match self {
            Action::Moving | Action::Resizing => Action::Selecting,
            Action::Drawing(_) if !repeat_draw => Action::Selecting,
            other => other,
        }
    }

    /// The toolbar entry that corresponds to this action
    pub fn tool(&self) -> Option<Tool> {
        match self {
            Action::None => None,
            Action::Selecting | Action::Moving | Action::Resizing => Some(Tool::Selection),
            Action::Drawing(ShapeTool::Line) => Some(Tool::Line),
            Action::Drawing(ShapeTool::Rectangle) => Some(Tool::Rectangle),
            Action::Writing => Some(Tool::Text),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Selecting => "selecting",
            Action::Drawing(_) => "drawing",
            Action::Moving => "moving",
            Action::Resizing => "resizing",
            Action::Writing => "writing",
        }
    }
}

/// The element grabbed by the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub id: usize,
    /// Pointer position minus the element's first corner at grab time
    pub offset: Vec2,
    pub position: Position,
}

/// A text box waiting for input
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub anchor: Pos2,
    pub value: String,
    /// Set until the UI has focused the text box once
    pub wants_focus: bool,
}

impl TextEntry {
    pub fn new(anchor: Pos2) -> Self {
        Self {
            anchor,
            value: String::new(),
            wants_focus: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_transitions() {
        assert_eq!(Action::for_tool(Tool::Selection), Action::Selecting);
        assert_eq!(Action::for_tool(Tool::Line), Action::Drawing(ShapeTool::Line));
        assert_eq!(Action::for_tool(Tool::Rectangle), Action::Drawing(ShapeTool::Rectangle));
        assert_eq!(Action::for_tool(Tool::Text), Action::Writing);
        for tool in Tool::ALL {
            assert_eq!(Action::for_tool(tool).tool(), Some(tool));
        }
    }

    #[test]
    fn test_hit_picks_move_or_resize() {
        assert_eq!(Action::for_hit(Position::Inside), Action::Moving);
        assert_eq!(Action::for_hit(Position::OnLine), Action::Moving);
        assert_eq!(Action::for_hit(Position::BottomLeft), Action::Resizing);
        assert_eq!(Action::for_hit(Position::End), Action::Resizing);
    }

    #[test]
    fn test_release() {
        assert_eq!(Action::Moving.after_release(true), Action::Selecting);
        assert_eq!(Action::Resizing.after_release(false), Action::Selecting);
        let drawing = Action::Drawing(ShapeTool::Line);
        assert_eq!(drawing.after_release(true), drawing);
        assert_eq!(drawing.after_release(false), Action::Selecting);
        assert_eq!(Action::Writing.after_release(false), Action::Writing);
        assert_eq!(Action::None.after_release(true), Action::None);
    }
}

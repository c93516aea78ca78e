use egui::{Context, PointerButton, Pos2, Rect};

use crate::editor::Editor;
use crate::error::BoardError;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Primary-button pointer events on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location } => *location,
        }
    }
}

/// Handles converting raw egui input into canvas-local InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, screen_pos: Pos2) -> InputLocation {
        InputLocation {
            position: screen_pos - self.canvas_rect.min.to_vec2(),
            is_in_canvas: self.canvas_rect.contains(screen_pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            let pointer = &input.pointer;
            self.events_for(
                pointer.latest_pos(),
                pointer.button_pressed(PointerButton::Primary),
                pointer.button_released(PointerButton::Primary),
            )
        })
    }

    /// Press, then move, then release, so a click within one frame still
    /// reaches the editor in gesture order.
    pub fn events_for(&mut self, pos: Option<Pos2>, pressed: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(pos) = pos else {
            return events;
        };
        let location = self.make_location(pos);

        if pressed && location.is_in_canvas {
            events.push(InputEvent::PointerDown { location });
        }
        if Some(pos) != self.last_pointer_pos {
            events.push(InputEvent::PointerMove { location });
            self.last_pointer_pos = Some(pos);
        }
        if released {
            events.push(InputEvent::PointerUp { location });
        }
        events
    }
}

/// Dispatch one event to the editor
pub fn route_event(event: &InputEvent, editor: &mut Editor) -> Result<(), BoardError> {
    match event {
        InputEvent::PointerDown { location } => editor.pointer_down(location.position),
        InputEvent::PointerMove { location } => editor.pointer_move(location.position),
        InputEvent::PointerUp { .. } => editor.pointer_up(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(0.0, 40.0), vec2(800.0, 600.0)))
    }

    #[test]
    fn test_click_produces_down_move_up_in_canvas_space() {
        let mut input = handler();
        let events = input.events_for(Some(pos2(20.0, 60.0)), true, true);
        let expected = InputLocation {
            position: pos2(20.0, 20.0),
            is_in_canvas: true,
        };
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { location: expected },
                InputEvent::PointerMove { location: expected },
                InputEvent::PointerUp { location: expected },
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_dropped() {
        let mut input = handler();
        let events = input.events_for(Some(pos2(20.0, 10.0)), true, false);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], InputEvent::PointerMove { .. }));
        assert!(!events[0].location().is_in_canvas);
    }

    #[test]
    fn test_still_pointer_emits_no_move() {
        let mut input = handler();
        input.events_for(Some(pos2(100.0, 100.0)), false, false);
        assert!(input.events_for(Some(pos2(100.0, 100.0)), false, false).is_empty());
        assert!(input.events_for(None, false, false).is_empty());
    }
}

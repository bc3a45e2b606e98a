use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Processed input events for the application
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Quit the application
    Quit,
    /// Add a new seat at a random spot
    AddSeat,
    /// Remove the most recently added seat
    RemoveSeat,
    /// Trigger a shuffle
    Shuffle,
    /// Toggle help overlay
    ToggleHelp,
    /// Close help (any key while help is shown)
    CloseHelp,
    /// Left button pressed at position (drag start / grab)
    MouseDown { x: u16, y: u16 },
    /// Left button dragged to position
    MouseDrag { x: u16, y: u16 },
    /// Left button released at position (drag end)
    MouseUp { x: u16, y: u16 },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// No event
    None,
}

/// Input handler for processing terminal events
pub struct InputHandler {
    help_visible: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            help_visible: false,
        }
    }

    /// Set help visibility state
    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    /// Poll for input events with timeout
    pub fn poll(&mut self, timeout: Duration) -> Option<InputEvent> {
        if event::poll(timeout).ok()? {
            match event::read().ok()? {
                Event::Key(key_event) => Some(self.handle_key(key_event)),
                Event::Mouse(mouse_event) => Some(self.handle_mouse(mouse_event)),
                Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Handle keyboard input
    fn handle_key(&self, event: KeyEvent) -> InputEvent {
        // If help is visible, any key closes it
        if self.help_visible {
            return InputEvent::CloseHelp;
        }

        match event.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,

            // Ctrl+C to quit
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputEvent::Quit
            }

            // Seat management
            KeyCode::Char('a') | KeyCode::Char('+') => InputEvent::AddSeat,
            KeyCode::Char('x') | KeyCode::Char('-') => InputEvent::RemoveSeat,

            // Shuffle trigger
            KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Shuffle,

            // Help
            KeyCode::Char('?') => InputEvent::ToggleHelp,

            _ => InputEvent::None,
        }
    }

    /// Handle mouse input (seat dragging)
    fn handle_mouse(&self, event: MouseEvent) -> InputEvent {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::MouseDown {
                x: event.column,
                y: event.row,
            },
            MouseEventKind::Drag(MouseButton::Left) => InputEvent::MouseDrag {
                x: event.column,
                y: event.row,
            },
            MouseEventKind::Up(MouseButton::Left) => InputEvent::MouseUp {
                x: event.column,
                y: event.row,
            },
            _ => InputEvent::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Input events the viewer responds to.
///
/// Positions are surface-local pixels (origin at the top-left corner of
/// the map surface). Rendering backends translate their native pointer
/// events into these before handing them to the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Single click/tap
    Click {
        position: Point,
        button: MouseButton,
    },
    /// Mouse/finger move
    MouseMove { position: Point },
    /// Surface resize
    Resize { size: Point },
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl InputEvent {
    /// Gets the primary position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::Click { position, .. } => Some(*position),
            InputEvent::MouseMove { position } => Some(*position),
            InputEvent::Resize { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_position() {
        let click = InputEvent::Click {
            position: Point::new(100.0, 200.0),
            button: MouseButton::Left,
        };
        assert_eq!(click.position(), Some(Point::new(100.0, 200.0)));

        let resize = InputEvent::Resize {
            size: Point::new(800.0, 500.0),
        };
        assert_eq!(resize.position(), None);
    }
}

//! Pointer events delivered by the host, in the picker's local coordinates.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers. Touch contacts report as [`MouseButton::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// A primary press (left click or touch down) at `position`.
    pub fn press(position: Point) -> Self {
        Self::Down {
            position,
            button: MouseButton::Left,
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position } => {
                position
            }
        }
    }

    /// The position of a primary press, if this is one.
    pub fn primary_press(&self) -> Option<Point> {
        match *self {
            Self::Down {
                position,
                button: MouseButton::Left,
            } => Some(position),
            _ => None,
        }
    }
}

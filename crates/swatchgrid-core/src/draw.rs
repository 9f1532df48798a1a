//! Backend-neutral drawing output of the picker.

use crate::color::Color;
use kurbo::{Rect, Vec2};

/// One drawing operation, in the picker's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill a swatch with its color.
    FillRect { rect: Rect, color: Color },
    /// Outline the selected swatch.
    StrokeRect { rect: Rect, color: Color, width: f64 },
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        match *self {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect, .. } => rect,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Self::FillRect { color, .. } | Self::StrokeRect { color, .. } => color,
        }
    }

    /// Move the command by `offset`, e.g. from local to screen coordinates.
    pub fn translated(self, offset: Vec2) -> Self {
        match self {
            Self::FillRect { rect, color } => Self::FillRect {
                rect: rect + offset,
                color,
            },
            Self::StrokeRect { rect, color, width } => Self::StrokeRect {
                rect: rect + offset,
                color,
                width,
            },
        }
    }
}

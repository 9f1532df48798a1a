//! Host size negotiation.

use crate::layout::{GRID_SPAN, Orientation};
use crate::style::PickerStyle;
use kurbo::Size;

/// A size constraint handed down by the host for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureSpec {
    /// The host decided the size.
    Exactly(f64),
    /// Up to this much space is available.
    AtMost(f64),
    /// No constraint; take what we want.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Reconcile a desired size with this constraint.
    pub fn resolve(self, desired: f64) -> f64 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(max) => desired.min(max),
            Self::Unspecified => desired,
        }
    }
}

/// Size the picker would like for `count` colors, padding included.
///
/// Each cell claims `box_size + box_gap` so the grid keeps a trailing gap on
/// both axes.
pub fn desired_size(count: usize, style: &PickerStyle, orientation: Orientation) -> Size {
    let pitch = style.box_size + style.box_gap;
    let span = GRID_SPAN as f64 * pitch;
    let cross = count.div_ceil(GRID_SPAN) as f64 * pitch;
    let padding = &style.padding;

    let (content_width, content_height) = match orientation {
        Orientation::Portrait => (span, cross),
        Orientation::Landscape => (cross, span),
    };

    Size::new(
        content_width + padding.left + padding.right,
        content_height + padding.top + padding.bottom,
    )
}

//! Color conversions and host-theme styling.

use egui::{Color32, Visuals};
use swatchgrid_core::{Color, PickerStyle};

/// Convert a packed color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Convert an egui color back to a packed color.
pub fn from_color32(color: Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::from_rgba(r, g, b, a)
}

/// Default picker style with the selection outline taken from the egui theme accent.
pub fn style_from_visuals(visuals: &Visuals) -> PickerStyle {
    PickerStyle::default().with_stroke_color(from_color32(visuals.selection.bg_fill))
}

//! egui host binding for the Swatchgrid color picker.
//!
//! - **Picker**: [`SwatchPicker`], a widget that sizes, paints and hit-tests a
//!   [`swatchgrid_core::PickerSurface`] inside an egui `Ui`
//! - **Theme**: color conversions and picker styles derived from egui visuals

pub mod picker;
pub mod theme;

pub use picker::{SwatchPicker, SwatchPickerResponse};
pub use theme::{from_color32, style_from_visuals, to_color32};

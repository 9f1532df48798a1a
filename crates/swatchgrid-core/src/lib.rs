//! Swatchgrid Core Library
//!
//! Platform-agnostic core of the Swatchgrid color picker: the palette, the
//! grid layout engine, and the picker surface that hit-tests presses and
//! reports selections.

pub mod color;
pub mod draw;
pub mod input;
pub mod layout;
pub mod measure;
pub mod palette;
pub mod style;
pub mod surface;

pub use color::{Color, ColorParseError};
pub use draw::DrawCommand;
pub use input::{MouseButton, PointerEvent};
pub use layout::{ColorBox, GRID_SPAN, GridMetrics, LayoutParams, Orientation, layout};
pub use measure::{MeasureSpec, desired_size};
pub use palette::{MaterialHue, MaterialPalette, PALETTE, PALETTE_LEN, SHADE_LABELS};
pub use style::{Padding, PickerStyle, StyleError, StyleResult};
pub use surface::{PickerSurface, SelectionListener};

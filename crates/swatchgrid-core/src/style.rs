//! Picker styling: swatch size, spacing, selection outline and padding.

use crate::color::{Color, ColorParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default swatch edge length in device-independent units.
pub const DEFAULT_BOX_SIZE: f64 = 40.0;
/// Default space between swatches.
pub const DEFAULT_BOX_GAP: f64 = 2.0;
/// Default selection outline width.
pub const DEFAULT_BOX_STROKE: f64 = 2.0;
/// Default selection outline color (Material pink A200 accent).
pub const DEFAULT_STROKE_COLOR: Color = Color(0xFFFF_4081);

/// Style loading errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Space kept free around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Visual configuration of a picker, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerStyle {
    /// Requested swatch edge length. Layout may shrink it to fit.
    pub box_size: f64,
    /// Space between neighbouring swatches.
    pub box_gap: f64,
    /// Width of the outline drawn around the selected swatch.
    pub box_stroke: f64,
    /// Color of the selection outline.
    pub stroke_color: Color,
    pub padding: Padding,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            box_gap: DEFAULT_BOX_GAP,
            box_stroke: DEFAULT_BOX_STROKE,
            stroke_color: DEFAULT_STROKE_COLOR,
            padding: Padding::default(),
        }
    }
}

impl PickerStyle {
    /// Load a style from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use swatchgrid_core::PickerStyle;
    ///
    /// let style = PickerStyle::from_json(r##"{ "box_size": 32, "stroke_color": "#3F51B5" }"##).unwrap();
    /// assert_eq!(style.box_size, 32.0);
    /// assert_eq!(style.box_gap, 2.0);
    /// ```
    pub fn from_json(json: &str) -> StyleResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative or non-finite dimensions.
    pub fn validate(&self) -> StyleResult<()> {
        let dimensions = [
            ("box_size", self.box_size),
            ("box_gap", self.box_gap),
            ("box_stroke", self.box_stroke),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    pub fn with_box_size(mut self, box_size: f64) -> Self {
        self.box_size = box_size;
        self
    }

    pub fn with_box_gap(mut self, box_gap: f64) -> Self {
        self.box_gap = box_gap;
        self
    }

    pub fn with_box_stroke(mut self, box_stroke: f64) -> Self {
        self.box_stroke = box_stroke;
        self
    }

    /// Set the selection outline color, usually the host theme's accent.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the selection outline color from a `#RRGGBB` or `#AARRGGBB` string.
    pub fn with_stroke_hex(self, hex: &str) -> StyleResult<Self> {
        Ok(self.with_stroke_color(Color::from_hex(hex)?))
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

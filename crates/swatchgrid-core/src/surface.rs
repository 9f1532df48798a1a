//! The interactive picker surface.
//!
//! Owns the laid-out swatches, produces draw commands, hit-tests pointer
//! presses and notifies selection listeners. The host drives it with three
//! calls: a size change ([`PickerSurface::set_available_space`] or
//! [`PickerSurface::measure`]), a draw ([`PickerSurface::render`]) and a
//! pointer press ([`PickerSurface::handle_pointer_down`]).

use std::borrow::Cow;
use std::fmt;

use kurbo::{Point, Size};

use crate::color::Color;
use crate::draw::DrawCommand;
use crate::input::PointerEvent;
use crate::layout::{ColorBox, LayoutParams, Orientation, layout};
use crate::measure::{MeasureSpec, desired_size};
use crate::palette::PALETTE;
use crate::style::PickerStyle;

/// Callback invoked with the newly selected color.
pub type SelectionListener = Box<dyn FnMut(Color)>;

/// A color swatch grid with single selection.
pub struct PickerSurface {
    palette: Cow<'static, [Color]>,
    style: PickerStyle,
    orientation: Orientation,
    size: Size,
    boxes: Vec<ColorBox>,
    /// Index into `boxes` of the outlined swatch.
    highlighted: Option<usize>,
    /// Survives relayout, unlike `highlighted`.
    selected: Option<Color>,
    listeners: Vec<SelectionListener>,
}

impl PickerSurface {
    /// Create a surface over the Material palette.
    pub fn new(style: PickerStyle) -> Self {
        Self::with_palette(&PALETTE[..], style)
    }

    /// Create a surface over a custom palette.
    pub fn with_palette(palette: impl Into<Cow<'static, [Color]>>, style: PickerStyle) -> Self {
        Self {
            palette: palette.into(),
            style,
            orientation: Orientation::default(),
            size: Size::ZERO,
            boxes: Vec::new(),
            highlighted: None,
            selected: None,
            listeners: Vec::new(),
        }
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size of the last layout pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current swatches in palette order.
    pub fn boxes(&self) -> &[ColorBox] {
        &self.boxes
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// The last selected color, if any swatch has been picked.
    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    /// Index of the first swatch containing `point`, edges included.
    pub fn box_at(&self, point: Point) -> Option<usize> {
        self.boxes.iter().position(|b| b.contains(point))
    }

    /// Rebuild every swatch for a new size or orientation.
    ///
    /// The selected color is kept and its swatch outlined again. Negative or
    /// otherwise unusable sizes produce an empty grid.
    pub fn set_available_space(&mut self, width: f64, height: f64, orientation: Orientation) {
        let params = LayoutParams {
            orientation,
            available: Size::new(width, height),
            box_size: self.style.box_size,
            box_gap: self.style.box_gap,
            padding_top: self.style.padding.top,
        };

        self.orientation = orientation;
        self.size = params.available;
        self.boxes = layout(&self.palette, &params);
        self.highlighted = None;

        if let Some(color) = self.selected {
            if let Some(index) = self.boxes.iter().position(|b| b.color == color) {
                self.boxes[index].highlighted = true;
                self.highlighted = Some(index);
            }
        }

        log::debug!(
            "Picker layout {:?}: width = {width}, height = {height}, swatches = {}, box = {:.2}",
            orientation,
            self.boxes.len(),
            self.boxes.first().map_or(0.0, |b| b.bounds.width()),
        );
        if self.boxes.is_empty() && !self.palette.is_empty() {
            log::warn!("Picker has no room for swatches at {width}x{height}");
        }
    }

    /// Answer a host measure request and lay out at the resolved size.
    pub fn measure(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        orientation: Orientation,
    ) -> Size {
        let desired = desired_size(self.palette.len(), &self.style, orientation);
        let width = width_spec.resolve(desired.width);
        let height = height_spec.resolve(desired.height);

        self.set_available_space(width, height, orientation);
        Size::new(width, height)
    }

    /// Draw commands for the current swatches.
    ///
    /// Each swatch is filled in palette order; the highlighted swatch gets its
    /// outline right after its fill.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.boxes.len() + 1);
        for b in &self.boxes {
            commands.push(DrawCommand::FillRect {
                rect: b.bounds,
                color: b.color,
            });
            if b.highlighted {
                commands.push(DrawCommand::StrokeRect {
                    rect: b.bounds,
                    color: self.style.stroke_color,
                    width: self.style.box_stroke,
                });
            }
        }
        commands
    }

    /// Select the swatch under `(x, y)`.
    ///
    /// Edges count as inside. On a hit the outline moves to the swatch, every
    /// listener is called with its color and the color is returned. A miss
    /// changes nothing.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> Option<Color> {
        let Some(index) = self.box_at(Point::new(x, y)) else {
            log::trace!("Pointer down at ({x}, {y}) missed every swatch");
            return None;
        };

        if let Some(previous) = self.highlighted.take() {
            if let Some(b) = self.boxes.get_mut(previous) {
                b.highlighted = false;
            }
        }
        self.boxes[index].highlighted = true;
        self.highlighted = Some(index);

        let color = self.boxes[index].color;
        self.selected = Some(color);
        log::trace!("Selected swatch {index} ({color})");

        for listener in &mut self.listeners {
            listener(color);
        }
        Some(color)
    }

    /// Route a host pointer event. Only primary presses select.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> Option<Color> {
        let position = event.primary_press()?;
        self.handle_pointer_down(position.x, position.y)
    }

    /// Register a callback for selections. Callbacks run in registration order.
    pub fn add_selection_listener(&mut self, listener: impl FnMut(Color) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl Default for PickerSurface {
    fn default() -> Self {
        Self::new(PickerStyle::default())
    }
}

impl fmt::Debug for PickerSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSurface")
            .field("palette_len", &self.palette.len())
            .field("style", &self.style)
            .field("orientation", &self.orientation)
            .field("size", &self.size)
            .field("boxes", &self.boxes.len())
            .field("highlighted", &self.highlighted)
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

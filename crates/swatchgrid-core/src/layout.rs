//! Palette grid layout.
//!
//! Packs an ordered color sequence into a grid that is [`GRID_SPAN`] cells
//! along the span axis (x in portrait, y in landscape) and as many cells as
//! needed along the other axis. Boxes shrink to fit the available space and
//! the grid is centered along the span axis.

use crate::color::Color;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Number of cells along the span axis.
pub const GRID_SPAN: usize = 10;

/// Grid orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// 10 columns, colors fill row by row.
    #[default]
    Portrait,
    /// 10 rows, colors fill column by column.
    Landscape,
}

impl Orientation {
    /// Landscape when the area is wider than it is tall.
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }
}

/// One selectable swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBox {
    /// Swatch rectangle in local coordinates.
    pub bounds: Rect,
    /// Palette color drawn in this swatch.
    pub color: Color,
    /// Whether the swatch carries the selection outline.
    pub highlighted: bool,
}

impl ColorBox {
    pub fn new(bounds: Rect, color: Color) -> Self {
        Self {
            bounds,
            color,
            highlighted: false,
        }
    }

    /// Point-in-rectangle test with inclusive edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.bounds.x0
            && point.x <= self.bounds.x1
            && point.y >= self.bounds.y0
            && point.y <= self.bounds.y1
    }
}

/// Inputs to [`layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub orientation: Orientation,
    /// Space the grid may occupy, padding included.
    pub available: Size,
    /// Requested swatch edge length. Shrunk when the grid does not fit.
    pub box_size: f64,
    /// Space between neighbouring swatches.
    pub box_gap: f64,
    /// Space reserved above the grid.
    pub padding_top: f64,
}

impl LayoutParams {
    pub fn new(orientation: Orientation, available: Size) -> Self {
        Self {
            orientation,
            available,
            box_size: 40.0,
            box_gap: 2.0,
            padding_top: 0.0,
        }
    }

    pub fn with_box_size(mut self, box_size: f64) -> Self {
        self.box_size = box_size;
        self
    }

    pub fn with_box_gap(mut self, box_gap: f64) -> Self {
        self.box_gap = box_gap;
        self
    }

    pub fn with_padding_top(mut self, padding_top: f64) -> Self {
        self.padding_top = padding_top;
        self
    }
}

/// Resolved grid geometry for a given color count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub orientation: Orientation,
    /// Effective swatch edge length after fitting.
    pub box_size: f64,
    pub box_gap: f64,
    /// Cells along the span axis (always [`GRID_SPAN`]).
    pub span: usize,
    /// Rows in portrait, columns in landscape.
    pub lines: usize,
    /// Top-left corner of the first cell.
    pub origin: Point,
}

impl GridMetrics {
    /// Fit a grid for `count` colors into the space described by `params`.
    ///
    /// Returns `None` when nothing can be laid out: no colors, negative or
    /// non-finite inputs, or a fitted box size that is not positive.
    ///
    /// A span at or below `10 * (box_size + box_gap)` is refit edge to edge, so
    /// the box can come out slightly larger than requested (419 wide gives 40.1).
    pub fn resolve(count: usize, params: &LayoutParams) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v >= 0.0;
        if count == 0
            || !usable(params.available.width)
            || !usable(params.available.height)
            || !usable(params.box_gap)
            || !usable(params.padding_top)
            || !params.box_size.is_finite()
            || params.box_size <= 0.0
        {
            return None;
        }

        let gap = params.box_gap;
        let lines = count.div_ceil(GRID_SPAN);
        let content_height = params.available.height - params.padding_top;
        let (span_available, cross_available) = match params.orientation {
            Orientation::Portrait => (params.available.width, content_height),
            Orientation::Landscape => (content_height, params.available.width),
        };

        let n = GRID_SPAN as f64;
        let m = lines as f64;
        let mut box_size = params.box_size;

        // The measured span reserves a trailing gap; anything at or under it refits.
        if span_available <= n * (box_size + gap) {
            box_size = (span_available - gap * (n - 1.0)) / n;
        }
        if cross_available < extent(lines, box_size, gap) {
            box_size = (cross_available - gap * (m - 1.0)) / m;
        }
        if !box_size.is_finite() || box_size <= 0.0 {
            return None;
        }

        let span_start = ((span_available - extent(GRID_SPAN, box_size, gap)) / 2.0).max(0.0);
        let origin = match params.orientation {
            Orientation::Portrait => Point::new(span_start, params.padding_top),
            Orientation::Landscape => {
                let cross_start =
                    ((cross_available - extent(lines, box_size, gap)) / 2.0).max(0.0);
                Point::new(cross_start, params.padding_top + span_start)
            }
        };

        Some(Self {
            orientation: params.orientation,
            box_size,
            box_gap: gap,
            span: GRID_SPAN,
            lines,
            origin,
        })
    }

    /// Distance between the starts of neighbouring cells.
    pub fn pitch(&self) -> f64 {
        self.box_size + self.box_gap
    }

    /// Total size of the grid including inner gaps.
    pub fn extent(&self) -> Size {
        let span = extent(self.span, self.box_size, self.box_gap);
        let cross = extent(self.lines, self.box_size, self.box_gap);
        match self.orientation {
            Orientation::Portrait => Size::new(span, cross),
            Orientation::Landscape => Size::new(cross, span),
        }
    }

    /// Rectangle of the cell holding the color at `index`.
    pub fn cell(&self, index: usize) -> Rect {
        let along = (index % self.span) as f64;
        let line = (index / self.span) as f64;
        let (col, row) = match self.orientation {
            Orientation::Portrait => (along, line),
            Orientation::Landscape => (line, along),
        };
        let x = self.origin.x + col * self.pitch();
        let y = self.origin.y + row * self.pitch();
        Rect::new(x, y, x + self.box_size, y + self.box_size)
    }
}

fn extent(cells: usize, box_size: f64, gap: f64) -> f64 {
    if cells == 0 {
        return 0.0;
    }
    cells as f64 * box_size + (cells - 1) as f64 * gap
}

/// Lay out one swatch per color, in color order.
///
/// Portrait fills rows of [`GRID_SPAN`] left to right, landscape fills
/// columns of [`GRID_SPAN`] top to bottom. A short final row or column is
/// left partially filled. Returns an empty vector when nothing fits.
pub fn layout(colors: &[Color], params: &LayoutParams) -> Vec<ColorBox> {
    let Some(grid) = GridMetrics::resolve(colors.len(), params) else {
        return Vec::new();
    };

    colors
        .iter()
        .enumerate()
        .map(|(index, &color)| ColorBox::new(grid.cell(index), color))
        .collect()
}

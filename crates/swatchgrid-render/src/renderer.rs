//! Painter trait abstraction.

use kurbo::{Affine, Rect, Vec2};
use swatchgrid_core::{Color, DrawCommand};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Non-finite geometry in draw command: {0:?}")]
    InvalidGeometry(Rect),
    #[error("Scale factor must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Commands from `PickerSurface::render`, in local coordinates.
    pub commands: &'a [DrawCommand],
    /// Where the picker's local origin sits in the target.
    pub origin: Vec2,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Optional fill painted behind the swatches, in local coordinates.
    pub background: Option<(Rect, Color)>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(commands: &'a [DrawCommand]) -> Self {
        Self {
            commands,
            origin: Vec2::ZERO,
            scale_factor: 1.0,
            background: None,
        }
    }

    /// Set the target position of the local origin.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Fill `rect` (local coordinates) with `color` before the swatches.
    pub fn with_background(mut self, rect: Rect, color: Color) -> Self {
        self.background = Some((rect, color));
        self
    }

    /// Local-to-target transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * Affine::translate(self.origin)
    }
}

/// Trait for rendering backends.
///
/// Rectangles arrive already transformed into target coordinates.
pub trait Painter {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle, centered on its edges.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
}

/// Replay a frame's commands into `painter`.
///
/// Returns the number of primitives painted. Zero-width strokes are skipped.
pub fn paint<P: Painter + ?Sized>(ctx: &RenderContext, painter: &mut P) -> RenderResult<usize> {
    if !ctx.scale_factor.is_finite() || ctx.scale_factor <= 0.0 {
        return Err(RendererError::InvalidScale(ctx.scale_factor));
    }

    let transform = ctx.transform();
    let mut painted = 0;

    if let Some((rect, color)) = ctx.background {
        painter.fill_rect(place(transform, rect)?, color);
        painted += 1;
    }

    for command in ctx.commands {
        match *command {
            DrawCommand::FillRect { rect, color } => {
                painter.fill_rect(place(transform, rect)?, color);
            }
            DrawCommand::StrokeRect { rect, color, width } => {
                if width <= 0.0 {
                    continue;
                }
                let rect = place(transform, rect)?;
                painter.stroke_rect(rect, color, width * ctx.scale_factor);
            }
        }
        painted += 1;
    }

    log::trace!("Painted {painted} primitives");
    Ok(painted)
}

fn place(transform: Affine, rect: Rect) -> RenderResult<Rect> {
    if rect.is_finite() {
        Ok(transform.transform_rect_bbox(rect))
    } else {
        Err(RendererError::InvalidGeometry(rect))
    }
}

/// Convert a packed color to a peniko color.
pub fn to_peniko(color: Color) -> peniko::Color {
    let [r, g, b, a] = color.to_rgba8();
    peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatchgrid_core::{Orientation, PickerSurface};

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Rect, Color)>,
        strokes: Vec<(Rect, Color, f64)>,
    }

    impl Painter for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.fills.push((rect, color));
        }

        fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
            self.strokes.push((rect, color, width));
        }
    }

    fn selected_surface() -> PickerSurface {
        let mut surface = PickerSurface::default();
        surface.set_available_space(420.0, 800.0, Orientation::Portrait);
        let p = surface.boxes()[3].bounds.center();
        surface.handle_pointer_down(p.x, p.y);
        surface
    }

    #[test]
    fn test_paint_replays_commands() {
        let surface = selected_surface();
        let commands = surface.render();
        let mut recorder = Recorder::default();

        let painted = paint(&RenderContext::new(&commands), &mut recorder).unwrap();

        assert_eq!(painted, 181);
        assert_eq!(recorder.fills.len(), 180);
        assert_eq!(recorder.strokes.len(), 1);
        assert_eq!(recorder.fills[3].0, surface.boxes()[3].bounds);
        assert_eq!(recorder.strokes[0].0, surface.boxes()[3].bounds);
    }

    #[test]
    fn test_paint_applies_origin_and_scale() {
        let surface = selected_surface();
        let commands = surface.render();
        let mut recorder = Recorder::default();
        let ctx = RenderContext::new(&commands)
            .with_origin(Vec2::new(10.0, 20.0))
            .with_scale_factor(2.0);

        paint(&ctx, &mut recorder).unwrap();

        let local = surface.boxes()[0].bounds;
        let (rect, _) = recorder.fills[0];
        assert!((rect.x0 - (local.x0 + 10.0) * 2.0).abs() < 1e-9);
        assert!((rect.y0 - (local.y0 + 20.0) * 2.0).abs() < 1e-9);
        assert!((rect.width() - local.width() * 2.0).abs() < 1e-9);
        assert!((recorder.strokes[0].2 - surface.style().box_stroke * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_background_painted_first() {
        let commands = selected_surface().render();
        let mut recorder = Recorder::default();
        let bg = Rect::new(0.0, 0.0, 420.0, 800.0);
        let ctx = RenderContext::new(&commands).with_background(bg, Color::WHITE);

        let painted = paint(&ctx, &mut recorder).unwrap();
        assert_eq!(painted, 182);
        assert_eq!(recorder.fills[0], (bg, Color::WHITE));
    }

    #[test]
    fn test_zero_width_stroke_skipped() {
        let commands = [DrawCommand::StrokeRect {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            color: Color::BLACK,
            width: 0.0,
        }];
        let mut recorder = Recorder::default();
        assert_eq!(paint(&RenderContext::new(&commands), &mut recorder).unwrap(), 0);
        assert!(recorder.strokes.is_empty());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let commands = [DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, f64::NAN, 1.0),
            color: Color::BLACK,
        }];
        let mut recorder = Recorder::default();
        assert!(matches!(
            paint(&RenderContext::new(&commands), &mut recorder),
            Err(RendererError::InvalidGeometry(_))
        ));

        let ctx = RenderContext::new(&[]).with_scale_factor(0.0);
        assert!(matches!(
            paint(&ctx, &mut recorder),
            Err(RendererError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_to_peniko() {
        let c = to_peniko(Color(0x803F_51B5));
        assert_eq!(c.to_rgba8().to_u8_array(), [0x3F, 0x51, 0xB5, 0x80]);
    }
}

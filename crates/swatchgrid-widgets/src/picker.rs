//! egui host for a [`PickerSurface`].

use egui::{CornerRadius, CursorIcon, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Vec2, vec2};
use kurbo::Size;
use swatchgrid_core::{
    Color, MaterialPalette, MeasureSpec, Orientation, PickerSurface, desired_size,
};
use swatchgrid_render::{Painter, RenderContext, paint};

use crate::theme;

/// Result of showing a [`SwatchPicker`].
pub struct SwatchPickerResponse {
    /// The underlying egui Response
    pub response: Response,
    /// Color picked this frame, if any
    pub selected: Option<Color>,
}

/// A swatch grid that fills the available space.
///
/// The surface is relaid out whenever the allocated size or orientation
/// changes; selection state lives in the surface and survives that.
pub struct SwatchPicker<'a> {
    surface: &'a mut PickerSurface,
    orientation: Option<Orientation>,
    max_size: Option<Vec2>,
    show_tooltips: bool,
}

impl<'a> SwatchPicker<'a> {
    /// Create a new picker widget over `surface`.
    pub fn new(surface: &'a mut PickerSurface) -> Self {
        Self {
            surface,
            orientation: None,
            max_size: None,
            show_tooltips: true,
        }
    }

    /// Force an orientation instead of deriving it from the available space.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Cap the space the picker may take.
    pub fn max_size(mut self, max_size: Vec2) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Show the palette name of the hovered swatch.
    pub fn tooltips(mut self, show: bool) -> Self {
        self.show_tooltips = show;
        self
    }

    /// Show the picker and return the response plus any new selection.
    pub fn show(self, ui: &mut Ui) -> SwatchPickerResponse {
        let available = match self.max_size {
            Some(max) => ui.available_size().min(max),
            None => ui.available_size(),
        };
        let orientation = self.orientation.unwrap_or_else(|| {
            Orientation::from_size(Size::new(available.x as f64, available.y as f64))
        });

        let width_spec = axis_spec(available.x);
        let height_spec = axis_spec(available.y);
        let desired = desired_size(self.surface.palette().len(), self.surface.style(), orientation);
        let size = Size::new(width_spec.resolve(desired.width), height_spec.resolve(desired.height));

        if size != self.surface.size() || orientation != self.surface.orientation() {
            self.surface.measure(width_spec, height_spec, orientation);
        }

        let (rect, response) =
            ui.allocate_exact_size(vec2(size.width as f32, size.height as f32), Sense::click());

        let mut selected = None;
        if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                let local = pos - rect.min;
                selected = self
                    .surface
                    .handle_pointer_down(local.x as f64, local.y as f64);
            }
        }

        if ui.is_rect_visible(rect) {
            let commands = self.surface.render();
            let ctx = RenderContext::new(&commands)
                .with_origin(kurbo::Vec2::new(rect.min.x as f64, rect.min.y as f64));
            let mut painter = EguiPainter {
                painter: ui.painter(),
            };
            if let Err(err) = paint(&ctx, &mut painter) {
                log::warn!("Skipping picker frame: {err}");
            }
        }

        let hovered_color = response
            .hover_pos()
            .map(|pos| pos - rect.min)
            .and_then(|local| {
                self.surface
                    .box_at(kurbo::Point::new(local.x as f64, local.y as f64))
            })
            .map(|index| self.surface.boxes()[index].color);

        let mut response = response.on_hover_cursor(CursorIcon::PointingHand);
        if self.show_tooltips {
            if let Some(color) = hovered_color {
                let label = MaterialPalette::describe(color).unwrap_or_else(|| color.to_hex());
                response = response.on_hover_text(label);
            }
        }
        if selected.is_some() {
            response.mark_changed();
        }

        SwatchPickerResponse { response, selected }
    }
}

/// Infinite space (e.g. inside a scroll area) leaves the axis unconstrained.
fn axis_spec(available: f32) -> MeasureSpec {
    if available.is_finite() {
        MeasureSpec::AtMost(available.max(0.0) as f64)
    } else {
        MeasureSpec::Unspecified
    }
}

struct EguiPainter<'p> {
    painter: &'p egui::Painter,
}

impl Painter for EguiPainter<'_> {
    fn fill_rect(&mut self, rect: kurbo::Rect, color: Color) {
        self.painter
            .rect_filled(to_egui_rect(rect), CornerRadius::ZERO, theme::to_color32(color));
    }

    fn stroke_rect(&mut self, rect: kurbo::Rect, color: Color, width: f64) {
        self.painter.rect_stroke(
            to_egui_rect(rect),
            CornerRadius::ZERO,
            Stroke::new(width as f32, theme::to_color32(color)),
            StrokeKind::Middle,
        );
    }
}

fn to_egui_rect(rect: kurbo::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, Event, Modifiers, PointerButton, RawInput};
    use swatchgrid_core::PALETTE;

    fn run_frame(ctx: &Context, surface: &mut PickerSurface, screen: Vec2) {
        run_frame_with_events(ctx, surface, screen, Vec::new());
    }

    /// Run one frame and return the picker's rect and selection.
    fn run_frame_with_events(
        ctx: &Context,
        surface: &mut PickerSurface,
        screen: Vec2,
        events: Vec<Event>,
    ) -> (egui::Rect, Option<Color>) {
        let input = RawInput {
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, screen)),
            events,
            ..Default::default()
        };
        let mut result = (egui::Rect::NOTHING, None);
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let shown = SwatchPicker::new(surface).show(ui);
                result = (shown.response.rect, shown.selected);
            });
        });
        result
    }

    fn button(pos: Pos2, button: PointerButton, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_axis_spec() {
        assert_eq!(axis_spec(300.0), MeasureSpec::AtMost(300.0));
        assert_eq!(axis_spec(-4.0), MeasureSpec::AtMost(0.0));
        assert_eq!(axis_spec(f32::INFINITY), MeasureSpec::Unspecified);
    }

    #[test]
    fn test_to_egui_rect() {
        let r = to_egui_rect(kurbo::Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r, egui::Rect::from_min_max(Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0)));
    }

    #[test]
    fn test_frame_lays_out_surface() {
        let ctx = Context::default();
        let mut surface = PickerSurface::default();

        run_frame(&ctx, &mut surface, vec2(1000.0, 600.0));
        assert_eq!(surface.orientation(), Orientation::Landscape);
        assert_eq!(surface.boxes().len(), 180);

        run_frame(&ctx, &mut surface, vec2(600.0, 1000.0));
        assert_eq!(surface.orientation(), Orientation::Portrait);
        assert_eq!(surface.boxes().len(), 180);
    }

    #[test]
    fn test_frame_keeps_selection_across_rotation() {
        let ctx = Context::default();
        let mut surface = PickerSurface::default();
        run_frame(&ctx, &mut surface, vec2(600.0, 1000.0));

        let p = surface.boxes()[45].bounds.center();
        surface.handle_pointer_down(p.x, p.y);

        run_frame(&ctx, &mut surface, vec2(1000.0, 600.0));
        assert_eq!(surface.selected_color(), Some(PALETTE[45]));
        assert_eq!(surface.highlighted_index(), Some(45));
    }

    #[test]
    fn test_frame_press_selects_swatch() {
        let ctx = Context::default();
        let mut surface = PickerSurface::default();
        let screen = vec2(600.0, 1000.0);

        let (rect, _) = run_frame_with_events(&ctx, &mut surface, screen, Vec::new());
        let center = surface.boxes()[45].bounds.center();
        let pos = rect.min + vec2(center.x as f32, center.y as f32);

        run_frame_with_events(&ctx, &mut surface, screen, vec![Event::PointerMoved(pos)]);
        let (_, selected) = run_frame_with_events(
            &ctx,
            &mut surface,
            screen,
            vec![button(pos, PointerButton::Primary, true)],
        );
        assert_eq!(selected, Some(PALETTE[45]));
        assert_eq!(surface.selected_color(), Some(PALETTE[45]));
        assert_eq!(surface.highlighted_index(), Some(45));

        run_frame_with_events(
            &ctx,
            &mut surface,
            screen,
            vec![button(pos, PointerButton::Primary, false)],
        );

        // Secondary presses never select, even over a different swatch
        let other = surface.boxes()[46].bounds.center();
        let other_pos = rect.min + vec2(other.x as f32, other.y as f32);
        run_frame_with_events(&ctx, &mut surface, screen, vec![Event::PointerMoved(other_pos)]);
        let (_, selected) = run_frame_with_events(
            &ctx,
            &mut surface,
            screen,
            vec![button(other_pos, PointerButton::Secondary, true)],
        );
        assert_eq!(selected, None);
        assert_eq!(surface.highlighted_index(), Some(45));
    }
}

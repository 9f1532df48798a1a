//! Vello painter implementation.

use crate::renderer::{Painter, RenderContext, RenderResult, paint, to_peniko};
use kurbo::{Affine, Rect, Stroke};
use peniko::Fill;
use swatchgrid_core::Color;
use vello::Scene;

/// Records picker frames into a Vello scene.
pub struct VelloRenderer {
    scene: Scene,
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Clear the scene and record one frame.
    pub fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<usize> {
        self.scene.reset();
        paint(ctx, self)
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for VelloRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &rect);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.scene.stroke(
            &Stroke::new(width),
            Affine::IDENTITY,
            to_peniko(color),
            None,
            &rect,
        );
    }
}

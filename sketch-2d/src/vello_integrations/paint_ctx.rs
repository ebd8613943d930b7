use sketch_core::foundation::{Canvas, PaintContext};
use vello::Scene;

use crate::{
    Affine2d, Affine2dCanvas, Affine2dPaintCommand, BoxSize, Fill, IntoKurbo, Point2d,
};

/// Encodes paint commands into a vello [Scene].
pub struct VelloPaintContext<'a> {
    curr_transform: Affine2d,
    bounds: peniko::kurbo::Rect,
    scene: &'a mut Scene,
}

impl<'a> VelloPaintContext<'a> {
    /// `size` is the logical size of the surface; `Color` commands flood exactly that area.
    pub fn new(scene: &'a mut Scene, size: BoxSize) -> Self {
        Self {
            curr_transform: Affine2dCanvas::identity_transform(),
            bounds: peniko::kurbo::Rect::from_origin_size(
                Point2d::ZERO.into_kurbo(),
                size.into_kurbo(),
            ),
            scene,
        }
    }
}

impl<'a> PaintContext for VelloPaintContext<'a> {
    type Canvas = Affine2dCanvas;

    #[inline(always)]
    fn add_command(&mut self, command: Affine2dPaintCommand) {
        use Affine2dPaintCommand::*;
        match command {
            DrawRect { rect, painter } => self.scene.fill(
                painter.fill,
                self.curr_transform,
                &painter.brush,
                painter.transform,
                &rect.into_kurbo(),
            ),
            Color { color } => {
                self.scene
                    .fill(Fill::NonZero, self.curr_transform, color, None, &self.bounds)
            }
        }
    }

    #[inline(always)]
    fn with_transform(&mut self, transform: Affine2d, op: impl FnOnce(&mut Self)) {
        let new_transform = self.curr_transform * transform;
        let old_transform = std::mem::replace(&mut self.curr_transform, new_transform);
        op(self);
        self.curr_transform = old_transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Affine2dPaintContextExt, Color, Rect};

    #[test]
    fn commands_land_in_scene_encoding() {
        let mut scene = Scene::new();
        assert!(scene.encoding().is_empty());
        {
            let mut ctx = VelloPaintContext::new(&mut scene, BoxSize::new(300.0, 300.0));
            ctx.draw_color(Color::WHITE);
            ctx.fill_rect(Rect::new_ltwh(20.0, 50.0, 100.0, 100.0), Color::ORANGE);
        }
        assert!(!scene.encoding().is_empty());
    }

    #[test]
    fn transform_is_restored_after_scope() {
        let mut scene = Scene::new();
        let mut ctx = VelloPaintContext::new(&mut scene, BoxSize::new(10.0, 10.0));
        ctx.with_transform(Affine2d::scale(2.0), |ctx| {
            assert_eq!(ctx.curr_transform, Affine2d::scale(2.0));
            ctx.with_transform(Affine2d::translate((1.0, 0.0)), |ctx| {
                assert_eq!(
                    ctx.curr_transform,
                    Affine2d::scale(2.0) * Affine2d::translate((1.0, 0.0))
                );
            });
        });
        assert_eq!(ctx.curr_transform, Affine2d::IDENTITY);
    }
}

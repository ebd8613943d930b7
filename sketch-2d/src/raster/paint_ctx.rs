use sketch_core::foundation::{Canvas, PaintContext};

use crate::{
    Affine2d, Affine2dCanvas, Affine2dPaintCommand, Brush, BoxSize, Color, CustomPainter,
    IntoKurbo, Pixmap,
};

/// Rasterizes paint commands into a [Pixmap] on the CPU.
///
/// Only solid brushes and axis-aligned transforms are supported. A pixel is covered when its
/// center lies inside the transformed shape.
pub struct RasterPaintContext<'a> {
    curr_transform: Affine2d,
    pixmap: &'a mut Pixmap,
}

impl<'a> RasterPaintContext<'a> {
    pub fn new(pixmap: &'a mut Pixmap) -> Self {
        Self {
            curr_transform: Affine2dCanvas::identity_transform(),
            pixmap,
        }
    }

    fn fill_device_rect(&mut self, rect: peniko::kurbo::Rect, color: Color) {
        let (x0, x1) = covered_span(rect.x0, rect.x1, self.pixmap.width());
        let (y0, y1) = covered_span(rect.y0, rect.y1, self.pixmap.height());
        if x0 < x1 && y0 < y1 {
            self.pixmap.fill_span(x0, x1, y0, y1, color);
        }
    }
}

/// Pixels whose centers `i + 0.5` fall within `[start, end)`, clamped to `[0, limit)`.
fn covered_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let clamp = |v: f64| v.clamp(0.0, limit as f64) as u32;
    (clamp((start - 0.5).ceil()), clamp((end - 0.5).ceil()))
}

impl<'a> PaintContext for RasterPaintContext<'a> {
    type Canvas = Affine2dCanvas;

    fn add_command(&mut self, command: Affine2dPaintCommand) {
        match command {
            Affine2dPaintCommand::DrawRect { rect, painter } => {
                let Brush::Solid(color) = painter.brush else {
                    tracing::warn!("Raster paint only supports solid brushes, skipping rect");
                    return;
                };
                let rect = self.curr_transform.transform_rect_bbox(rect.into_kurbo());
                self.fill_device_rect(rect, color);
            }
            Affine2dPaintCommand::Color { color } => {
                let size = self.pixmap.size().into_kurbo();
                let bounds = peniko::kurbo::Rect::from_origin_size((0.0, 0.0), size);
                self.fill_device_rect(bounds, color);
            }
        }
    }

    fn with_transform(&mut self, transform: Affine2d, op: impl FnOnce(&mut Self)) {
        let new_transform = self.curr_transform * transform;
        let old_transform = std::mem::replace(&mut self.curr_transform, new_transform);
        op(self);
        self.curr_transform = old_transform;
    }
}

/// Paints `painter` headlessly at the given logical size and device scale.
pub fn rasterize(
    painter: &impl CustomPainter,
    size: BoxSize,
    scale: f64,
    base_color: Color,
) -> Pixmap {
    let (width, height) = size.to_physical(scale);
    let mut pixmap = Pixmap::new(width, height, base_color);
    let mut ctx = RasterPaintContext::new(&mut pixmap);
    ctx.with_transform(Affine2d::scale(scale), |ctx| {
        painter.perform_paint(&size, ctx)
    });
    pixmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Affine2dPaintContextExt, FillPainter, Gradient, Rect};

    #[test]
    fn rect_covers_pixel_centers_only() {
        let mut pixmap = Pixmap::new(10, 10, Color::BLACK);
        RasterPaintContext::new(&mut pixmap)
            .fill_rect(Rect::new_ltwh(2.0, 3.0, 4.0, 5.0), Color::RED);
        for y in 0..10 {
            for x in 0..10 {
                let expected = if (2..6).contains(&x) && (3..8).contains(&y) {
                    Color::RED
                } else {
                    Color::BLACK
                };
                assert_eq!(pixmap.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn rect_outside_pixmap_is_clipped() {
        let mut pixmap = Pixmap::new(4, 4, Color::BLACK);
        RasterPaintContext::new(&mut pixmap)
            .fill_rect(Rect::new_ltwh(-10.0, 2.0, 100.0, 100.0), Color::RED);
        assert_eq!(pixmap.pixel(0, 1), Some(Color::BLACK));
        assert_eq!(pixmap.pixel(0, 2), Some(Color::RED));
        assert_eq!(pixmap.pixel(3, 3), Some(Color::RED));
    }

    #[test]
    fn color_command_floods_surface_under_transform() {
        let mut pixmap = Pixmap::new(6, 6, Color::BLACK);
        let mut ctx = RasterPaintContext::new(&mut pixmap);
        ctx.with_transform(Affine2d::scale(2.0), |ctx| ctx.draw_color(Color::WHITE));
        assert!(pixmap.pixels().iter().all(|pixel| *pixel == Color::WHITE));
    }

    #[test]
    fn non_solid_brush_is_skipped() {
        let mut pixmap = Pixmap::new(4, 4, Color::BLACK);
        RasterPaintContext::new(&mut pixmap).draw_rect(
            Rect::new_ltwh(0.0, 0.0, 4.0, 4.0),
            FillPainter {
                brush: Gradient::new_linear((0.0, 0.0), (4.0, 0.0)).into(),
                ..FillPainter::solid(Color::RED)
            },
        );
        assert!(pixmap.pixels().iter().all(|pixel| *pixel == Color::BLACK));
    }
}

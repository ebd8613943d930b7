use sketch_2d::{
    Affine2dCanvas, Affine2dPaintContextExt, BoxSize, Color, CustomPainter, Rect,
    DEFAULT_BACKGROUND,
};
use sketch_core::foundation::PaintContext;

pub const PANEL_TITLE: &str = "Draw Panel";
pub const PANEL_SIZE: BoxSize = BoxSize::new(300.0, 300.0);

/// Paints a single orange square on the default background.
pub struct DrawPanel;

impl DrawPanel {
    pub fn square() -> Rect {
        Rect::new_ltwh(20.0, 50.0, 100.0, 100.0)
    }
}

impl CustomPainter for DrawPanel {
    fn perform_paint(
        &self,
        size: &BoxSize,
        paint_ctx: &mut impl PaintContext<Canvas = Affine2dCanvas>,
    ) {
        tracing::trace!(?size, "Painting draw panel");
        paint_ctx.draw_color(DEFAULT_BACKGROUND);
        paint_ctx.fill_rect(Self::square(), Color::ORANGE);
    }
}

#[cfg(test)]
mod tests {
    use sketch_2d::rasterize;

    use super::*;

    #[test]
    fn orange_is_canonical() {
        assert_eq!(Color::ORANGE, Color::rgb8(255, 165, 0));
    }

    #[test]
    fn orange_fills_exactly_the_square() {
        // Base differs from the panel background to prove the background is painted too.
        let pixmap = rasterize(&DrawPanel, PANEL_SIZE, 1.0, Color::BLACK);
        assert_eq!((pixmap.width(), pixmap.height()), (300, 300));
        for y in 0..300 {
            for x in 0..300 {
                let expected = if (20..120).contains(&x) && (50..150).contains(&y) {
                    Color::ORANGE
                } else {
                    DEFAULT_BACKGROUND
                };
                assert_eq!(pixmap.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn square_follows_device_scale() {
        let pixmap = rasterize(&DrawPanel, PANEL_SIZE, 2.0, Color::BLACK);
        assert_eq!((pixmap.width(), pixmap.height()), (600, 600));
        assert_eq!(pixmap.pixel(39, 100), Some(DEFAULT_BACKGROUND));
        assert_eq!(pixmap.pixel(40, 100), Some(Color::ORANGE));
        assert_eq!(pixmap.pixel(239, 299), Some(Color::ORANGE));
        assert_eq!(pixmap.pixel(240, 299), Some(DEFAULT_BACKGROUND));
        assert_eq!(pixmap.pixel(100, 300), Some(DEFAULT_BACKGROUND));
    }

    #[test]
    fn repaint_is_stable() {
        let first = rasterize(&DrawPanel, PANEL_SIZE, 1.0, Color::BLACK);
        let second = rasterize(&DrawPanel, PANEL_SIZE, 1.0, Color::WHITE);
        assert_eq!(first, second);
    }
}

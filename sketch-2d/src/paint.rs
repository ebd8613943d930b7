use sketch_core::foundation::{Canvas, PaintContext};

pub use peniko::{kurbo, Brush, Color, Fill, Gradient};

use crate::{Affine2dCanvas, Rect};

pub type Affine2d = kurbo::Affine;

/// Background a panel is cleared to before its render callback paints.
pub const DEFAULT_BACKGROUND: Color = Color::rgb8(238, 238, 238);

pub enum Affine2dPaintCommand {
    DrawRect {
        rect: Rect,
        painter: FillPainter,
    },
    /// Floods the whole paint surface.
    Color {
        color: Color,
    },
}

#[derive(Clone, Debug)]
pub struct FillPainter {
    pub fill: Fill,
    pub brush: Brush,
    pub transform: Option<Affine2d>,
}

impl FillPainter {
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Fill::NonZero,
            brush: Brush::Solid(color),
            transform: None,
        }
    }
}

pub trait Affine2dPaintContextExt {
    fn draw_color(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Rect, painter: FillPainter);
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

impl<T> Affine2dPaintContextExt for T
where
    T: PaintContext,
    T::Canvas: Canvas<Transform = Affine2d, PaintCommand = Affine2dPaintCommand>,
{
    #[inline(always)]
    fn draw_color(&mut self, color: Color) {
        self.add_command(Affine2dPaintCommand::Color { color })
    }
    #[inline(always)]
    fn draw_rect(&mut self, rect: Rect, painter: FillPainter) {
        self.add_command(Affine2dPaintCommand::DrawRect { rect, painter })
    }
    #[inline(always)]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_rect(rect, FillPainter::solid(color))
    }
}

impl Canvas for Affine2dCanvas {
    type Transform = Affine2d;

    type PaintCommand = Affine2dPaintCommand;

    fn identity_transform() -> Affine2d {
        Affine2d::IDENTITY
    }
}

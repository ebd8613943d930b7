use sketch_core::foundation::PaintContext;

use crate::{Affine2dCanvas, BoxSize};

/// A render callback registered with a window or rasterizer.
///
/// Coordinates are logical. The host applies the device scale before calling in.
pub trait CustomPainter: Send + Sync + 'static {
    fn perform_paint(
        &self,
        size: &BoxSize,
        paint_ctx: &mut impl PaintContext<Canvas = Affine2dCanvas>,
    );
}

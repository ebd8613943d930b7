/// Canvas of 2D affine-transformed painting, encoded into vello scenes for presentation.
pub struct Affine2dCanvas;

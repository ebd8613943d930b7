mod paint_ctx;
mod pixmap;

pub use paint_ctx::*;
pub use pixmap::*;

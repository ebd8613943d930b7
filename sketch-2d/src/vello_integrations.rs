mod canvas;
mod into_kurbo;
mod paint_ctx;

pub use canvas::*;
pub use into_kurbo::*;
pub use paint_ctx::*;

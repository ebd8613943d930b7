mod canvas;
pub use canvas::*;

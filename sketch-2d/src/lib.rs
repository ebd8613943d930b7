mod r#box;
pub use r#box::*;

mod custom_paint;
pub use custom_paint::*;

mod paint;
pub use paint::*;

mod shape;
pub use shape::*;

mod raster;
pub use raster::*;

mod vello_integrations;
pub use vello_integrations::*;

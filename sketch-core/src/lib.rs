pub mod foundation;

mod tracing_setup;
pub use tracing_setup::*;

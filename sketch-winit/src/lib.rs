mod app_main;
pub use app_main::{AppLauncher, Window, WindowAttributes};

mod error;
pub use error::*;

mod stat;
use stat::*;

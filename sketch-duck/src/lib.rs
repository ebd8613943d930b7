mod duck;
pub use duck::*;

mod recipe;
pub use recipe::*;

mod demonstration;
pub use demonstration::*;

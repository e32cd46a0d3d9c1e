mod marcher;
mod window;

pub use marcher::*;
pub use window::*;

mod driver;
mod max_mass;
mod stability;

pub use driver::*;
pub use max_mass::*;
pub use stability::*;

pub use get_water::*;
pub use get_well::*;

mod get_water;
mod get_well;

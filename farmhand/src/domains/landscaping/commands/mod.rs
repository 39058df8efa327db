pub use build_well::*;
pub use dig_hole::*;
pub use drain_hole::*;
pub use fill_hole::*;

mod build_well;
mod dig_hole;
mod drain_hole;
mod fill_hole;

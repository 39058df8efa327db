pub use clear_crop::*;
pub use fertilize::*;
pub use harvest_crop::*;
pub use plant_crop::*;

mod clear_crop;
mod fertilize;
mod harvest_crop;
mod plant_crop;

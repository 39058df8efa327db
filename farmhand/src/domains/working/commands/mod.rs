pub use fire_worker::*;
pub use hire_worker::*;
pub use move_worker::*;
pub use tasks::*;
pub use upkeep::*;

mod fire_worker;
mod hire_worker;
mod move_worker;
mod tasks;
mod upkeep;

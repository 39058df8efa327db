pub use claims::*;
pub use commands::*;
pub use domain::*;
pub use queries::*;

mod claims;
mod commands;
mod domain;
mod queries;

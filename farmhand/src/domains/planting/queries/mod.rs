pub use get_crop::*;

mod get_crop;

pub mod economy;
pub mod landscaping;
pub mod planting;
pub mod timing;
pub mod working;

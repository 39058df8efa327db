mod build_well;
mod clear_spoiled;
mod dig_hole;
mod draw_water;
mod drain_hole;
mod fertilize;
mod fill_hole;
mod harvest_crop;
mod move_farmer;
mod plant_crop;

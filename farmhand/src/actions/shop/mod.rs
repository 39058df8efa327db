mod buy_seeds;
mod fire_worker;
mod hire_worker;
mod select_seed;

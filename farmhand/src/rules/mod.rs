mod ground;
mod work;

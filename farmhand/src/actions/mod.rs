mod farmer;
mod shop;

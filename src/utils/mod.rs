pub mod date;
pub mod discount;
pub mod geo;

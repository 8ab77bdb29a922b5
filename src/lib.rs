//! PPP discount service: maps a caller's country to a workshop price or
//! coupon discount, and tells the front end which workshops still accept one.

pub mod config;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;
pub mod utils;

pub mod config;
pub mod mail;
pub mod model;
pub mod order;

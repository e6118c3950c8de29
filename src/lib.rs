pub mod config;
pub mod decisioning;

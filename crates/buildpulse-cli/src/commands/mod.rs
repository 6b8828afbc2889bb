pub mod config;
pub mod fire;

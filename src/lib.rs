pub mod cli;
pub mod config;
pub mod feed;
pub mod observability;
pub mod render;

pub use config::Config;

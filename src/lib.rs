pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod util;

pub use config::get_version;

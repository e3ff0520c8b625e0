//! Command-line data-entry shell around `psychro-core`.

pub mod config;
pub mod logger;
pub mod plotting;
pub mod processes;
pub mod readings;

//! foco-core - Shared functionality for the foco tools
//!
//! Paths, configuration loading and small text formatting helpers.

pub mod config;
pub mod format;
pub mod paths;

pub use config::Config;
pub use paths::Paths;

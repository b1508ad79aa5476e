//! Server-side helpers for legacy page templates: a sliding-window pager,
//! Japanese relative-time formatting, and small markup, query and JSON
//! dump utilities.

pub mod config;
pub mod preview;
pub mod utils;

pub use config::{Config, ConfigError};

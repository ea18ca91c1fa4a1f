//! Configuration for diffmark
//!
//! This crate provides:
//! - Config file discovery (CWD, then home directory)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;

pub use app_config::AppConfig;
pub use config_file::{config_candidates, find_config_file, CONFIG_FILE};

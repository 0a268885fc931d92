//! Data directory and configuration file handling.

pub mod config;
pub mod paths;

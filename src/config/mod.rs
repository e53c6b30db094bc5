// src/config/mod.rs

//! Configuration loading and validation for husched.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like a positive machine count (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, load_and_validate, load_default, load_from_path, load_from_path_with_fs,
};
pub use model::{ConfigFile, DEFAULT_MACHINES, InputSection, RawConfigFile, ScheduleSection};
pub use validate::validate_config;

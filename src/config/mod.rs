// src/config/mod.rs

//! Configuration loading and validation for citysched.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate node ids, source and target (`validate.rs`).
//! - Provide the built-in worked example (`sample.rs`).

pub mod loader;
pub mod model;
pub mod sample;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, ConfigSection, EdgeConfig, GraphSection, RawConfigFile};

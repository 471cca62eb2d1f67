// src/config/mod.rs

//! Task file loading and validation for schedag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//! - Turn the raw file into a validated [`SchedulingProblem`](crate::dag::SchedulingProblem)
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_with_policy};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig};

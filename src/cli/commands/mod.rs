//! CLI command implementations.

pub mod default_config;
pub mod observers;
pub mod simulate;
pub mod validate;

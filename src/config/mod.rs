//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config file shape, resolved config, environment snapshot
//! - [`defaults`]: Built-in default values
//! - [`loading`]: Config file discovery and layered resolution
//! - [`validation`]: Startup checks on the resolved config

mod defaults;
mod loading;
mod types;
mod validation;

pub use types::Config;

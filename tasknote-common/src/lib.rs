//! # TaskNote Common Library
//!
//! Shared plumbing for TaskNote services:
//! - Common error type
//! - Configuration loading (`.env` + services TOML)
//! - Logging setup
//! - Timestamp utilities

pub mod config;
pub mod error;
pub mod logging;
pub mod time;

pub use error::{Error, Result};

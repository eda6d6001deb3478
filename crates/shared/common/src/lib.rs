//! Common utilities shared by the workspace binaries.
//!
//! This crate provides:
//! - Application error handling on top of domain errors
//! - Configuration loaded from the environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};

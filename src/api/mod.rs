//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`members`] - roster registration, lookup, photo, edit, delete

pub mod health;
pub mod members;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

//! Utility module - shared error types and logging
//!
//! # Contents
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - Result alias used by HTTP handlers
//! - logging setup helpers

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

//! Roster Server - classroom roster registration service
//!
//! A small HTTP service that lets a fixed-size roster of members register a
//! profile (name, nickname, social links, one photo) under a client-chosen
//! member number, optionally protected by a password for edit/delete.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # Routes and handlers
//! ├── db/            # Embedded SurrealDB storage layer
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use core::server::build_app;
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

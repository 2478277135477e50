//! Member API module
//!
//! Route table (paths kept from the original frontend contract):
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /upload | POST | register a member (multipart form) |
//! | /user?id= | GET | member metadata by object id |
//! | /photo/{id} | GET | raw photo bytes by object id |
//! | /all_users | GET | all members, name-ordered, redacted |
//! | /edit_user | POST | partial update, password-gated |
//! | /delete_user | POST | delete, password-gated |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::core::ServerState;

/// Request body ceiling: the 5MB photo cap plus multipart framing headroom
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/upload", post(handler::upload))
        .route("/user", get(handler::get_user))
        .route("/photo/{id}", get(handler::get_photo))
        .route("/all_users", get(handler::list_users))
        .route("/edit_user", post(handler::edit_user))
        .route("/delete_user", post(handler::delete_user))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

//! Health check route
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | liveness + store reachability |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    /// Current number of registered members, if the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<usize>,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    // A cheap listing doubles as the store reachability probe
    let members = state.members.find_all().await.ok().map(|m| m.len());

    Json(HealthResponse {
        status: if members.is_some() {
            "healthy"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        members,
    })
}

//! A liveness probe for load balancers and container orchestrators.

use axum::Json;
use serde::{Deserialize, Serialize};

/// The body of a health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthBody {
    /// Always "ok" when the server is able to respond.
    pub status: String,
}

/// Respond with `{"status": "ok"}`.
pub async fn get_health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_owned(),
    })
}

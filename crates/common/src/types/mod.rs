use serde::Serialize;

/// Liveness payload for the health endpoint.
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

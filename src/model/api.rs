use serde::{Deserialize, Serialize};

/// Error envelope returned by the Skald API for failed requests
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// Human-readable error message
    pub error: String,
}

use serde::{Deserialize, Serialize};

/// JSON body returned by every error response, `{"error": "..."}`.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

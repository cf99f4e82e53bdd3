use serde::{Deserialize, Serialize};

pub mod routes;
pub mod services;

/// Structured error body for JSON endpoints, e.g. `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self {
            error: error.into(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The sole persisted entity: one short code mapped to one original URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(short_code: String, original_url: String) -> Self {
        Self {
            short_code,
            original_url,
            created_at: Utc::now(),
        }
    }
}

//! ==============================================================================
//! lib.rs - wire types for the trimmer backend
//! ==============================================================================
//!
//! purpose:
//!     defines the json bodies exchanged with the url shortening backend.
//!     the backend itself is an external service; these types only pin
//!     down the field names it expects and returns.
//!
//! relationships:
//!     - used by: web (api client)
//!
//! protocol:
//!     POST {backend}/
//!         body: {"longUrl": "https://example.com/long/path"}
//!         response (200): {"message": "abc123"}
//!     GET {backend}/
//!         warm-up probe, body ignored
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// shorten request / response
// ==============================================================================

/// body of the shorten request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    /// the long url, already trimmed by the caller
    #[serde(rename = "longUrl")]
    pub long_url: String,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

/// body of a successful (200) shorten response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    /// short code path segment, appended to the backend base address
    pub message: String,
}

// ==============================================================================
// tests
// ==============================================================================

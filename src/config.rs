//! Client configuration
//!
//! Holds the knobs the CLI exposes: which API host to talk to and which
//! image to show for shows without artwork.

use crate::search_client::PLACEHOLDER_IMAGE_URL;

/// Default TVMaze API host
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Configuration for the search client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the metadata API, without endpoint paths
    pub base_url: String,
    /// Image URL substituted for shows without a medium image
    pub placeholder_image_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}

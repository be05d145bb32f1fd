/// Show search and episode listing against a remote metadata source.
///
/// This module provides the normalized `Show` and `Episode` structures and
/// the `ShowSource` trait the rest of the crate talks to. It has no
/// knowledge of how results are displayed.
mod normalize;
mod tvmaze;
mod tvmaze_types;

pub use normalize::{NO_DESCRIPTION, PLACEHOLDER_IMAGE_URL};
pub use tvmaze::TvMazeClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the metadata source.
#[derive(Debug, Error)]
pub enum SearchClientError {
    /// The request did not produce a usable response: transport error,
    /// non-success HTTP status, or a body that is not the expected JSON array
    #[error("Request to {url} failed: {reason}")]
    RequestFailure { url: String, reason: String },
}

/// A TV series search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Identifier used to request the show's episodes
    pub id: u64,
    /// The show title
    pub name: String,
    /// HTML summary, or the "no description" placeholder
    pub summary: String,
    /// Medium-resolution poster, or the placeholder image URL
    pub image_url: String,
}

/// A single aired episode of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode identifier
    pub id: u64,
    /// The episode title
    pub name: String,
    /// Season number as reported by the source (0 for specials)
    pub season: u32,
    /// Episode number within the season; specials may not have one
    pub number: Option<u32>,
}

/// Trait for sources that can search shows and list their episodes.
///
/// Implementors perform exactly one request per call and return results in
/// the order the remote side delivered them.
pub trait ShowSource {
    /// Searches for shows matching a free-text term.
    ///
    /// # Arguments
    ///
    /// * `term` - The search term, passed through without trimming
    ///
    /// # Returns
    ///
    /// The matching shows in source order. An empty list is not an error.
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, SearchClientError>;

    /// Lists all episodes of a show.
    ///
    /// # Arguments
    ///
    /// * `show_id` - Identifier of a show obtained from `search_shows`
    ///
    /// # Returns
    ///
    /// The show's episodes in source order, possibly empty.
    fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>, SearchClientError>;
}

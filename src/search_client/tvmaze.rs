/// TVMaze search client implementation.
use super::normalize::{normalize_episode, normalize_show};
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{Episode, SearchClientError, Show, ShowSource};
use crate::config::ClientConfig;
use serde::de::DeserializeOwned;

/// Search client for the TVMaze API.
///
/// Talks to the `/search/shows` and `/shows/{id}/episodes` endpoints of the
/// configured base URL (https://api.tvmaze.com by default).
pub struct TvMazeClient {
    client: reqwest::blocking::Client,
    base_url: String,
    placeholder_image_url: String,
}

impl TvMazeClient {
    /// Creates a new TVMaze client from the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            placeholder_image_url: config.placeholder_image_url.clone(),
        }
    }

    /// URL of the show search endpoint (without query string)
    fn search_url(&self) -> String {
        format!("{}/search/shows", self.base_url)
    }

    /// URL of the episode listing endpoint for a show
    fn episodes_url(&self, show_id: u64) -> String {
        format!("{}/shows/{}/episodes", self.base_url, show_id)
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// Transport errors, non-success statuses and undecodable bodies all
    /// become `RequestFailure`.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SearchClientError> {
        let failure = |reason: String| SearchClientError::RequestFailure {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| failure(e.to_string()))?;

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(failure(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| failure(format!("invalid response body: {}", e)))
    }
}

impl ShowSource for TvMazeClient {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, SearchClientError> {
        let results: Vec<TvMazeSearchResult> =
            self.get_json(&self.search_url(), &[("q", term)])?;

        Ok(results
            .into_iter()
            .map(|result| normalize_show(result.show, &self.placeholder_image_url))
            .collect())
    }

    fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>, SearchClientError> {
        let episodes: Vec<TvMazeEpisode> = self.get_json(&self.episodes_url(show_id), &[])?;

        Ok(episodes.into_iter().map(normalize_episode).collect())
    }
}

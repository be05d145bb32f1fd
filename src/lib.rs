//! TV Scout - Search TV shows and browse their episodes
//!
//! This library provides a client for the TVMaze API that normalizes show
//! and episode records, a small document model that renders them as result
//! cards and an episode list, and the event wiring that ties user gestures
//! to remote requests.

mod app;
mod config;
mod search_client;
mod view;

pub use app::{App, ProgressEvent, wire_events};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use search_client::{
    Episode, NO_DESCRIPTION, PLACEHOLDER_IMAGE_URL, SearchClientError, Show, ShowSource,
    TvMazeClient,
};
pub use view::{
    EpisodesPanel, ShowCard, UiContext, UiEvent, episode_line, format_episodes_panel,
    format_show_card, render_episodes, render_page, render_shows, show_card_markup,
};

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Top-level error type for TV Scout operations
#[derive(Debug, Error)]
pub enum TvScoutError {
    /// Error while talking to the metadata source
    #[error("Search error: {0}")]
    SearchClient(#[from] SearchClientError),

    /// Error while rendering HTML templates
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the document as a standalone HTML page
///
/// # Arguments
///
/// * `ctx` - The document to render
/// * `path` - Destination file, overwritten if it exists
pub fn export_page(ctx: &UiContext, path: &Path) -> Result<(), TvScoutError> {
    fs::write(path, render_page(ctx)?)?;
    Ok(())
}

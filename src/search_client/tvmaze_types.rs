/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Everything below the top-level array is optional so that sparse records
/// are normalized rather than rejected.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(crate) struct TvMazeSearchResult {
    /// The matched show (the relevance score is not read)
    pub show: TvMazeShow,
}

/// A show record as embedded in a search result.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TvMazeShow {
    pub id: u64,
    pub name: Option<String>,
    /// Summary in HTML format (may be null or empty)
    pub summary: Option<String>,
    /// Poster variants (null when the show has no artwork)
    pub image: Option<TvMazeImage>,
}

/// Image variants of a show.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TvMazeImage {
    pub medium: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
}

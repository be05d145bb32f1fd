//! Projection of raw TVMaze records into `Show` and `Episode`
//!
//! All defaulting of missing data happens here and nowhere else.

use super::tvmaze_types::{TvMazeEpisode, TvMazeShow};
use super::{Episode, Show};

/// Summary used when a show has no (or an empty) description
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Image used when a show has no medium-resolution artwork
pub const PLACEHOLDER_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Converts a TVMaze show to our internal Show structure.
///
/// An absent image object, an image without a `medium` variant and an
/// empty `medium` URL all fall back to `placeholder_image_url`. A null or
/// empty summary falls back to [`NO_DESCRIPTION`].
pub(crate) fn normalize_show(raw: TvMazeShow, placeholder_image_url: &str) -> Show {
    let image_url = raw
        .image
        .and_then(|image| image.medium)
        .filter(|medium| !medium.is_empty())
        .unwrap_or_else(|| placeholder_image_url.to_string());

    let summary = raw
        .summary
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Show {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        summary,
        image_url,
    }
}

/// Converts a TVMaze episode to our internal Episode structure.
///
/// Season and number are passed through untouched.
pub(crate) fn normalize_episode(raw: TvMazeEpisode) -> Episode {
    Episode {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        season: raw.season,
        number: raw.number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_client::tvmaze_types::TvMazeSearchResult;

    fn shows_from(json: &str) -> Vec<Show> {
        let results: Vec<TvMazeSearchResult> = serde_json::from_str(json).unwrap();
        results
            .into_iter()
            .map(|result| normalize_show(result.show, PLACEHOLDER_IMAGE_URL))
            .collect()
    }

    #[test]
    fn test_null_image_uses_placeholder() {
        let shows = shows_from(
            r#"[{"score": 0.9, "show": {"id": 1, "name": "Bletchley Circle", "summary": "<p>Codebreakers.</p>", "image": null}}]"#,
        );
        assert_eq!(shows[0].image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(shows[0].summary, "<p>Codebreakers.</p>");
    }

    #[test]
    fn test_missing_or_empty_medium_uses_placeholder() {
        let shows = shows_from(
            r#"[
                {"score": 1.0, "show": {"id": 1, "name": "A", "summary": "x", "image": {"original": "https://img/o.jpg"}}},
                {"score": 1.0, "show": {"id": 2, "name": "B", "summary": "x", "image": {"medium": "", "original": "https://img/o.jpg"}}},
                {"score": 1.0, "show": {"id": 3, "name": "C", "summary": "x"}}
            ]"#,
        );
        assert!(shows.iter().all(|s| s.image_url == PLACEHOLDER_IMAGE_URL));
    }

    #[test]
    fn test_medium_image_is_used() {
        let shows = shows_from(
            r#"[{"score": 1.0, "show": {"id": 7, "name": "A", "summary": "x", "image": {"medium": "https://img/m.jpg", "original": "https://img/o.jpg"}}}]"#,
        );
        assert_eq!(shows[0].image_url, "https://img/m.jpg");
    }

    #[test]
    fn test_custom_placeholder() {
        let show = normalize_show(TvMazeShow::default(), "https://example.org/none.png");
        assert_eq!(show.image_url, "https://example.org/none.png");
    }

    #[test]
    fn test_empty_or_missing_summary() {
        let shows = shows_from(
            r#"[
                {"score": 1.0, "show": {"id": 1, "name": "A", "summary": "", "image": null}},
                {"score": 1.0, "show": {"id": 2, "name": "B", "summary": null, "image": null}},
                {"score": 1.0, "show": {"id": 3, "name": "C", "image": null}}
            ]"#,
        );
        assert!(shows.iter().all(|s| s.summary == NO_DESCRIPTION));
    }

    #[test]
    fn test_search_order_is_preserved() {
        let shows = shows_from(
            r#"[
                {"score": 0.2, "show": {"id": 30, "name": "Low"}},
                {"score": 0.9, "show": {"id": 10, "name": "High"}},
                {"score": 0.5, "show": {"id": 20, "name": "Mid"}}
            ]"#,
        );
        let ids: Vec<u64> = shows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_episode_passes_numbers_through() {
        let raw: Vec<TvMazeEpisode> = serde_json::from_str(
            r#"[
                {"id": 5, "name": "Pilot", "season": 2, "number": 1, "airdate": "2012-09-06", "runtime": 60},
                {"id": 4, "name": "Finale", "season": 1, "number": 3},
                {"id": 9, "name": "Christmas Special", "season": 1, "number": null}
            ]"#,
        )
        .unwrap();
        let episodes: Vec<Episode> = raw.into_iter().map(normalize_episode).collect();

        assert_eq!(
            episodes[0],
            Episode {
                id: 5,
                name: "Pilot".to_string(),
                season: 2,
                number: Some(1),
            }
        );
        assert_eq!(episodes[1].id, 4);
        assert_eq!(episodes[2].number, None);
    }
}

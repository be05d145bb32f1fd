//! Event wiring
//!
//! Connects the two user gestures to the search client and the renderer.
//! The application is assembled once through [`wire_events`] and then fed
//! [`UiEvent`]s one at a time.

use crate::search_client::{SearchClientError, ShowSource};
use crate::view::{self, UiContext, UiEvent};

/// Progress event emitted while handling a gesture
///
/// These events allow library users to log what the application is doing,
/// display status, or remain silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A show search is about to be sent
    SearchStarted { term: String },

    /// Search results were rendered
    ShowsRendered { count: usize },

    /// The episode listing for a show is about to be fetched
    FetchingEpisodes { show_id: u64 },

    /// Episodes were rendered and the episode panel is visible
    EpisodesRendered { show_id: u64, count: usize },

    /// The episode panel was hidden
    EpisodesHidden,
}

/// The assembled application: a show source, the document, and the
/// progress sink
pub struct App<S, F>
where
    S: ShowSource,
    F: FnMut(ProgressEvent),
{
    source: S,
    context: UiContext,
    progress_callback: F,
}

/// Wires the gesture handlers to a source and a document
///
/// Call this once at startup; the returned `App` owns the context from
/// then on and is the only thing that mutates it.
///
/// # Examples
///
/// ```no_run
/// use tv_scout::{ClientConfig, TvMazeClient, UiContext, UiEvent, wire_events};
///
/// let client = TvMazeClient::new(&ClientConfig::default());
/// let mut app = wire_events(client, UiContext::new(), |_| {});
/// app.dispatch(UiEvent::SearchSubmitted { term: "bletchly".to_string() })?;
/// # Ok::<(), tv_scout::SearchClientError>(())
/// ```
pub fn wire_events<S, F>(source: S, context: UiContext, progress_callback: F) -> App<S, F>
where
    S: ShowSource,
    F: FnMut(ProgressEvent),
{
    App {
        source,
        context,
        progress_callback,
    }
}

impl<S, F> App<S, F>
where
    S: ShowSource,
    F: FnMut(ProgressEvent),
{
    /// The current document
    pub fn context(&self) -> &UiContext {
        &self.context
    }

    /// Handles a single gesture
    ///
    /// A `RequestFailure` is returned to the caller unchanged; the results
    /// and episode lists are left as they were before the gesture.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), SearchClientError> {
        match event {
            UiEvent::SearchSubmitted { term } => self.on_search_submit(&term),
            UiEvent::EpisodesTriggered { show_id } => self.on_episodes_trigger(show_id),
        }
    }

    /// Hides the episode panel, searches for `term` and renders the results
    pub fn on_search_submit(&mut self, term: &str) -> Result<(), SearchClientError> {
        self.context.search_term = term.to_string();

        view::hide_episodes(&mut self.context);
        (self.progress_callback)(ProgressEvent::EpisodesHidden);

        (self.progress_callback)(ProgressEvent::SearchStarted {
            term: term.to_string(),
        });
        let shows = self.source.search_shows(term)?;

        view::render_shows(&mut self.context, &shows);
        (self.progress_callback)(ProgressEvent::ShowsRendered { count: shows.len() });

        Ok(())
    }

    /// Fetches the episodes of `show_id` and reveals them
    pub fn on_episodes_trigger(&mut self, show_id: u64) -> Result<(), SearchClientError> {
        (self.progress_callback)(ProgressEvent::FetchingEpisodes { show_id });
        let episodes = self.source.list_episodes(show_id)?;

        view::render_episodes(&mut self.context, &episodes);
        (self.progress_callback)(ProgressEvent::EpisodesRendered {
            show_id,
            count: episodes.len(),
        });

        Ok(())
    }
}

//! Document model and rendering
//!
//! The visible state lives in a [`UiContext`]: the search form's term, the
//! results panel with one card per show, and the episode panel. Rendering
//! functions take the context explicitly and fully replace the panel they
//! own; there is no incremental diffing.

mod html;
mod terminal;

pub use html::{render_page, show_card_markup};
pub use terminal::{format_episodes_panel, format_show_card};

use crate::search_client::{Episode, Show};

/// A gesture the user can perform on the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search form was submitted with the given term
    SearchSubmitted { term: String },
    /// The "Episodes" control of the card for `show_id` was activated
    EpisodesTriggered { show_id: u64 },
}

/// A rendered search result
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCard {
    /// The show displayed by this card
    pub show: Show,
}

impl ShowCard {
    /// The event emitted by this card's "Episodes" control
    pub fn episodes_trigger(&self) -> UiEvent {
        UiEvent::EpisodesTriggered {
            show_id: self.show.id,
        }
    }
}

/// The list of episodes of the selected show
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodesPanel {
    /// One line per episode, in source order
    pub items: Vec<String>,
    /// Hidden until the first episode listing is rendered
    pub visible: bool,
}

/// All UI state of the application
///
/// Owned by the application assembly and handed to every rendering
/// function; nothing reaches it as ambient state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiContext {
    /// Current contents of the search input
    pub search_term: String,
    /// Results panel, one card per show
    pub show_cards: Vec<ShowCard>,
    /// Episode panel
    pub episodes: EpisodesPanel,
}

impl UiContext {
    /// Creates an empty document with the episode panel hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the card for a show id
    pub fn card(&self, show_id: u64) -> Option<&ShowCard> {
        self.show_cards.iter().find(|card| card.show.id == show_id)
    }
}

/// Replaces the results panel with one card per show, in list order.
pub fn render_shows(ctx: &mut UiContext, shows: &[Show]) {
    ctx.show_cards.clear();
    ctx.show_cards.extend(shows.iter().cloned().map(|show| ShowCard { show }));
}

/// Replaces the episode list and makes the episode panel visible.
pub fn render_episodes(ctx: &mut UiContext, episodes: &[Episode]) {
    ctx.episodes.items.clear();
    ctx.episodes.items.extend(episodes.iter().map(episode_line));
    ctx.episodes.visible = true;
}

/// Hides the episode panel without touching its contents.
pub fn hide_episodes(ctx: &mut UiContext) {
    ctx.episodes.visible = false;
}

/// Formats an episode as `<name> (Season: <season>, Number: <number>)`.
///
/// Episodes without a number (specials) show `n/a`.
pub fn episode_line(episode: &Episode) -> String {
    let number = episode
        .number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{} (Season: {}, Number: {})",
        episode.name, episode.season, number
    )
}

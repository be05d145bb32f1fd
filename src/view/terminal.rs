//! Plain-text rendering of the document for the CLI

use super::{EpisodesPanel, ShowCard};

/// Formats a result card as an indented text block
///
/// The HTML summary is flattened to plain text.
pub fn format_show_card(index: usize, card: &ShowCard) -> String {
    let show = &card.show;
    let summary = nanohtml2text::html2text(&show.summary).trim().to_string();
    format!(
        "[{}] {} (id {})\n    Image: {}\n    {}\n",
        index + 1,
        show.name,
        show.id,
        show.image_url,
        summary.replace('\n', "\n    ")
    )
}

/// Formats the episode panel, or nothing while it is hidden
pub fn format_episodes_panel(panel: &EpisodesPanel) -> Option<String> {
    if !panel.visible {
        return None;
    }

    if panel.items.is_empty() {
        return Some("  (no episodes)\n".to_string());
    }

    Some(
        panel
            .items
            .iter()
            .map(|line| format!("  - {}\n", line))
            .collect(),
    )
}

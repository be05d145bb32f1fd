//! HTML markup for the document
//!
//! Templates use the `.html` suffix so minijinja auto-escapes every value.
//! Show summaries arrive from the API as HTML fragments and are the one
//! value marked `safe`.

use super::{ShowCard, UiContext};
use crate::search_client::Show;
use minijinja::{Environment, context};

const SHOW_CARD_TEMPLATE: &str = r#"<div data-show-id="{{ show.id }}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{{ show.image_url }}" alt="{{ show.name }}" class="w-25 mr-3">
    <div class="media-body">
      <h5 class="text-primary">{{ show.name }}</h5>
      <div><small>{{ show.summary|safe }}</small></div>
      <button class="btn btn-outline-light btn-sm Show-getEpisodes" data-show-id="{{ show.id }}">
        Episodes
      </button>
    </div>
  </div>
</div>
"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>TV Scout</title>
</head>
<body>
<form id="searchForm">
  <input id="searchForm-term" name="q" value="{{ term }}">
  <button type="submit">Go!</button>
</form>
<div id="showsList" class="row">
{% for show in shows %}{% include "show_card.html" %}{% endfor %}
</div>
<ul id="episodesArea"{% if not episodes_visible %} hidden{% endif %}>
{% for line in episodes %}  <li>{{ line }}</li>
{% endfor %}</ul>
</body>
</html>
"#;

/// Builds the template environment with the card and page templates
fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("show_card.html", SHOW_CARD_TEMPLATE)?;
    env.add_template("page.html", PAGE_TEMPLATE)?;
    Ok(env)
}

/// Builds the markup of a single result card
pub fn show_card_markup(card: &ShowCard) -> Result<String, minijinja::Error> {
    let env = environment()?;
    env.get_template("show_card.html")?
        .render(context! { show => &card.show })
}

/// Renders the whole document as a standalone HTML page
///
/// The episode panel carries the `hidden` attribute while it is not
/// visible.
pub fn render_page(ctx: &UiContext) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let shows: Vec<&Show> = ctx.show_cards.iter().map(|card| &card.show).collect();

    env.get_template("page.html")?.render(context! {
        term => &ctx.search_term,
        shows => shows,
        episodes => &ctx.episodes.items,
        episodes_visible => ctx.episodes.visible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_client::PLACEHOLDER_IMAGE_URL;
    use crate::view::{render_episodes, render_shows};

    fn card(image_url: &str) -> ShowCard {
        ShowCard {
            show: Show {
                id: 1,
                name: "Tom & Jerry".to_string(),
                summary: "<p>Cat <b>chases</b> mouse.</p>".to_string(),
                image_url: image_url.to_string(),
            },
        }
    }

    #[test]
    fn test_card_markup() {
        let markup = show_card_markup(&card("https://img.example/m.jpg")).unwrap();
        assert!(markup.contains(r#"data-show-id="1""#));
        assert!(markup.contains("img.example"));
        assert!(markup.contains(r#"alt="Tom &amp; Jerry""#));
        assert!(markup.contains("<h5 class=\"text-primary\">Tom &amp; Jerry</h5>"));
        assert!(markup.contains("<small><p>Cat <b>chases</b> mouse.</p></small>"));
        assert!(markup.contains("Episodes"));
    }

    #[test]
    fn test_placeholder_image_is_never_empty_src() {
        let markup = show_card_markup(&card(PLACEHOLDER_IMAGE_URL)).unwrap();
        assert!(markup.contains("tinyurl.com"));
        assert!(markup.contains("tv-missing"));
        assert!(!markup.contains(r#"src="""#));
    }

    #[test]
    fn test_page_episode_panel_visibility() {
        let mut ctx = UiContext::new();
        ctx.search_term = "tom".to_string();
        render_shows(&mut ctx, &[card("https://img.example/m.jpg").show]);

        let page = render_page(&ctx).unwrap();
        assert!(page.contains(r#"<ul id="episodesArea" hidden>"#));
        assert!(page.contains(r#"value="tom""#));
        assert_eq!(page.matches("class=\"Show ").count(), 1);

        render_episodes(&mut ctx, &[]);
        let page = render_page(&ctx).unwrap();
        assert!(page.contains("<ul id=\"episodesArea\">"));
    }

    #[test]
    fn test_page_escapes_episode_lines() {
        let mut ctx = UiContext::new();
        ctx.episodes.items = vec!["<Pilot> (Season: 1, Number: 1)".to_string()];
        ctx.episodes.visible = true;

        let page = render_page(&ctx).unwrap();
        assert!(page.contains("<li>&lt;Pilot&gt; (Season: 1, Number: 1)</li>"));
    }
}

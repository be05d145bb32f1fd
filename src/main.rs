use clap::Parser;
use dialoguer::{Input, Select};
use std::path::PathBuf;
use std::process;
use tv_scout::{
    App, ClientConfig, DEFAULT_BASE_URL, PLACEHOLDER_IMAGE_URL, ProgressEvent, TvMazeClient,
    UiContext, UiEvent, export_page, format_episodes_panel, format_show_card, wire_events,
};

/// Search TV shows on TVMaze and list their episodes
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Search term; starts an interactive session when omitted
    term: Option<String>,

    /// List the episodes of this show id after searching
    #[arg(short, long, requires = "term")]
    episodes: Option<u64>,

    /// Write the resulting page as HTML to this file
    #[arg(long)]
    html: Option<PathBuf>,

    /// Base URL of the TVMaze API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Image URL used for shows without artwork
    #[arg(long, default_value = PLACEHOLDER_IMAGE_URL)]
    placeholder_image: String,

    /// Do not print progress messages
    #[arg(short, long)]
    quiet: bool,
}

/// Handles progress events and prints formatted output to stderr
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::SearchStarted { term } => {
            eprintln!("Searching for '{}'...", term);
        }
        ProgressEvent::ShowsRendered { count } => {
            if count == 0 {
                eprintln!("No shows found.");
            } else {
                eprintln!("Found {} show(s)\n", count);
            }
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            eprintln!("Fetching episodes of show {}...", show_id);
        }
        ProgressEvent::EpisodesRendered { count, .. } => {
            eprintln!("Found {} episode(s)\n", count);
        }
        ProgressEvent::EpisodesHidden => {}
    }
}

/// Prints the visible parts of the document
fn print_document(ctx: &UiContext) {
    for (index, card) in ctx.show_cards.iter().enumerate() {
        println!("{}", format_show_card(index, card));
    }

    if let Some(episodes) = format_episodes_panel(&ctx.episodes) {
        println!("=== Episodes ===");
        print!("{}", episodes);
    }
}

/// One-shot mode: search, optionally list episodes, print
fn run_once<F>(app: &mut App<TvMazeClient, F>, term: &str, episodes: Option<u64>) -> bool
where
    F: FnMut(ProgressEvent),
{
    let mut events = vec![UiEvent::SearchSubmitted {
        term: term.to_string(),
    }];
    if let Some(show_id) = episodes {
        events.push(UiEvent::EpisodesTriggered { show_id });
    }

    for event in events {
        if let Err(e) = app.dispatch(event) {
            eprintln!("\nError: {}", e);
            return false;
        }
    }

    print_document(app.context());
    true
}

/// Interactive mode: prompt for terms and episode triggers until the user quits
///
/// Request failures are reported and the session continues.
fn run_interactive<F>(app: &mut App<TvMazeClient, F>) -> Result<(), dialoguer::Error>
where
    F: FnMut(ProgressEvent),
{
    loop {
        let term: String = Input::new()
            .with_prompt("Search shows")
            .allow_empty(true)
            .interact_text()?;

        if let Err(e) = app.dispatch(UiEvent::SearchSubmitted { term }) {
            eprintln!("Error: {}\n", e);
            continue;
        }

        loop {
            print_document(app.context());

            let cards = &app.context().show_cards;
            let mut choices: Vec<String> = cards
                .iter()
                .map(|card| format!("Episodes: {}", card.show.name))
                .collect();
            choices.push("New search".to_string());
            choices.push("Quit".to_string());

            let selection = Select::new()
                .with_prompt("What next?")
                .items(&choices)
                .default(0)
                .interact()?;

            if selection == cards.len() {
                break;
            }
            if selection == cards.len() + 1 {
                return Ok(());
            }

            let trigger = cards[selection].episodes_trigger();
            if let Err(e) = app.dispatch(trigger) {
                eprintln!("Error: {}\n", e);
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = ClientConfig {
        base_url: cli.base_url,
        placeholder_image_url: cli.placeholder_image,
    };
    let client = TvMazeClient::new(&config);

    let quiet = cli.quiet;
    let mut app = wire_events(client, UiContext::new(), move |event| {
        if !quiet {
            handle_progress_event(event);
        }
    });

    let success = match cli.term {
        Some(term) => run_once(&mut app, &term, cli.episodes),
        None => match run_interactive(&mut app) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("\nError: {}", e);
                false
            }
        },
    };

    if let Some(path) = cli.html {
        if let Err(e) = export_page(app.context(), &path) {
            eprintln!("Error: failed to write {}: {}", path.display(), e);
            process::exit(1);
        }
        if !quiet {
            eprintln!("Wrote page to {}", path.display());
        }
    }

    if !success {
        process::exit(1);
    }
}

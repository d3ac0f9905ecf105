use clap::Parser;
use dialoguer::{Input, Select};
use showfinder::{
    Controller, ControllerError, Page, ShowFinderError, ShowDirectory, TVMAZE_BASE_URL,
    TvMazeDirectory,
};
use std::process;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Search the TVMaze show directory and list the episodes of a show.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Search term; omit it to start an interactive session
    term: Option<String>,

    /// Root of the TVMaze compatible API to query
    #[arg(long, env = "SHOWFINDER_BASE_URL", default_value = TVMAZE_BASE_URL)]
    base_url: String,

    /// Print the rendered HTML page instead of plain text
    #[arg(long)]
    html: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    ShowFinder(#[from] ShowFinderError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<ControllerError> for CliError {
    fn from(e: ControllerError) -> Self {
        CliError::ShowFinder(e.into())
    }
}

/// Sets up the tracing subscriber, logging to stderr
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_status(page: &Page) {
    if let Some(status) = page.status() {
        eprintln!("Error: {}", status);
    }
}

/// Prints the show list as plain text, summaries stripped of their markup
fn print_shows(page: &Page) {
    let units = page.shows().units();

    if units.is_empty() {
        println!("No shows found.");
        return;
    }

    println!("\n=== Shows ===\n");
    for (index, unit) in units.iter().enumerate() {
        println!("[{}] {} (#{})", index + 1, unit.name, unit.show_id);
        println!("    Image: {}", unit.image);

        let summary = nanohtml2text::html2text(&unit.summary);
        let summary = summary.trim();
        if !summary.is_empty() {
            println!("    {}", summary);
        }
        println!();
    }
}

fn print_episodes(page: &Page) {
    let area = page.episodes();
    if !area.is_visible() {
        return;
    }

    println!("\n=== Episodes ===\n");
    if area.lines().is_empty() {
        println!("No episodes listed.");
    }
    for line in area.lines() {
        println!("  {}", line.text);
    }
    println!();
}

fn print_page(page: &Page, html: bool) -> Result<(), ShowFinderError> {
    if html {
        println!("{}", page.to_html()?);
    } else {
        print_shows(page);
        print_episodes(page);
    }
    Ok(())
}

/// Lets the user pick shows from the current list until they ask for a new search
fn browse_shows<D: ShowDirectory>(
    controller: &mut Controller<D>,
    html: bool,
) -> Result<(), CliError> {
    loop {
        let mut items: Vec<String> = controller
            .page()
            .shows()
            .units()
            .iter()
            .map(|unit| format!("{} (#{})", unit.name, unit.show_id))
            .collect();
        if items.is_empty() {
            return Ok(());
        }
        let show_count = items.len();
        items.push("New search".to_string());

        let selection = Select::new()
            .with_prompt("Show episodes of")
            .items(&items)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(index) if index < show_count => match controller.activate_episodes(index) {
                Ok(_) if html => print_page(controller.page(), html)?,
                Ok(_) => print_episodes(controller.page()),
                Err(_) => print_status(controller.page()),
            },
            _ => return Ok(()),
        }
    }
}

fn run_interactive<D: ShowDirectory>(
    controller: &mut Controller<D>,
    html: bool,
) -> Result<(), CliError> {
    loop {
        let term: String = Input::<String>::new()
            .with_prompt("Search shows (empty to quit)")
            .allow_empty(true)
            .interact_text()?;

        let term = term.trim();
        if term.is_empty() {
            return Ok(());
        }

        if controller.submit_search(term).is_err() {
            print_status(controller.page());
            continue;
        }

        print_page(controller.page(), html)?;
        browse_shows(controller, html)?;
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let directory = TvMazeDirectory::with_base_url(&args.base_url);
    let mut controller = Controller::new(directory);

    match args.term {
        Some(term) => {
            controller.submit_search(&term)?;
            print_page(controller.page(), args.html)?;
            Ok(())
        }
        None => run_interactive(&mut controller, args.html),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}

//! showfinder - Search a TV show directory and browse episode lists
//!
//! This library provides a client for the TVMaze show directory, renderers
//! that turn shows and episodes into display units, and a controller that
//! wires user events (search submitted, "Episodes" activated) to both.
//!
//! # Examples
//!
//! ```no_run
//! use showfinder::{Controller, TvMazeDirectory};
//!
//! let mut controller = Controller::new(TvMazeDirectory::new());
//! controller.submit_search("girls")?;
//! controller.activate_episodes(0)?;
//!
//! for line in controller.page().episodes().lines() {
//!     println!("{}", line.text);
//! }
//! # Ok::<(), showfinder::ShowFinderError>(())
//! ```

mod controller;
mod page;
mod rendering;
mod show_directory;

pub use controller::{Controller, ControllerError, Event, Outcome};
pub use page::{Element, EpisodeArea, EpisodeLine, Page, ShowList, ShowUnit, UnitPart};
pub use rendering::{RenderError, format_episode_line, render_episodes, render_shows};
pub use show_directory::{
    Episode, MISSING_IMAGE_URL, Show, ShowDirectory, ShowDirectoryError, TVMAZE_BASE_URL,
    TvMazeDirectory,
};

use thiserror::Error;

/// Top-level error type for showfinder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error while handling a user event
    #[error("{0}")]
    Controller(#[from] ControllerError),

    /// Error while producing markup
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl From<askama::Error> for ShowFinderError {
    fn from(e: askama::Error) -> Self {
        ShowFinderError::Render(RenderError::Template(e))
    }
}

/// Data structures and traits for querying a TV show directory.
///
/// This module provides the normalized `Show` and `Episode` records the rest
/// of the crate works with, as well as the `ShowDirectory` trait implemented
/// by directory backends.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{TVMAZE_BASE_URL, TvMazeDirectory};

use thiserror::Error;

/// Image URL used for shows the directory has no artwork for.
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that fail a whole directory request.
#[derive(Debug, Error)]
pub enum ShowDirectoryError {
    /// The request could not be sent or the server answered with an error status
    #[error("Request failed: {0}")]
    NetworkError(String),

    /// Failed to parse the directory's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The requested show does not exist
    #[error("Show not found: {0}")]
    ShowNotFound(u64),
}

/// Errors scoped to a single record of an otherwise valid response.
///
/// These never fail a request; the offending record is substituted or skipped.
#[derive(Debug, Error)]
pub(crate) enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{field} must be at least 1, got {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

/// A television series as returned by a show search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Directory identifier of the show
    pub id: u64,
    /// The show's title
    pub name: String,
    /// Summary of the show, may contain HTML markup
    pub summary: String,
    /// Poster URL, never empty
    pub image: String,
}

/// A single episode belonging to one show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Directory identifier of the episode
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season this episode belongs to, starting at 1
    pub season: u32,
    /// The episode number within its season, starting at 1
    pub episode: u32,
    /// Summary of the episode, may contain HTML markup
    pub summary: String,
}

/// Trait for directories that can be searched for shows and episodes.
///
/// Implementors issue exactly one request per call and return the records
/// of that response only.
pub trait ShowDirectory {
    /// Searches the directory for shows matching `term`.
    ///
    /// Every returned show carries an image URL; shows without artwork get
    /// [`MISSING_IMAGE_URL`].
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, ShowDirectoryError>;

    /// Fetches all episodes of the show with the given identifier.
    ///
    /// Records that lack any required field are dropped from the result
    /// instead of failing the request.
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ShowDirectoryError>;
}

impl<D: ShowDirectory + ?Sized> ShowDirectory for &D {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, ShowDirectoryError> {
        (**self).search_shows(term)
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ShowDirectoryError> {
        (**self).fetch_episodes(show_id)
    }
}

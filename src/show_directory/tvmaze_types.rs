/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
use serde::Deserialize;

/// One hit from the `/search/shows` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchHit {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as embedded in a search hit.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// TVMaze show identifier
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Show summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Poster images (null for shows without artwork)
    #[serde(default)]
    pub image: Option<TvMazeImage>,
}

/// Image URLs attached to a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    #[serde(default)]
    pub original: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
///
/// Every field is required; records that do not fit are dropped by the caller.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// TVMaze episode identifier
    pub id: u64,
    /// Episode title
    pub name: String,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
    /// Episode summary in HTML format
    pub summary: String,
}

/// TVMaze show directory implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchHit};
use super::{Episode, MISSING_IMAGE_URL, RecordError, Show, ShowDirectory, ShowDirectoryError};
use serde_json::Value;
use tracing::{debug, warn};

/// Default root of the TVMaze API.
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Show directory backed by the TVMaze API.
///
/// Searches use the `/search/shows` endpoint, episode lists come from
/// `/shows/{id}/episodes`.
pub struct TvMazeDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeDirectory {
    /// Creates a new directory talking to https://api.tvmaze.com.
    pub fn new() -> Self {
        Self::with_base_url(TVMAZE_BASE_URL)
    }

    /// Creates a new directory talking to a TVMaze compatible API at `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request and returns the response body as a list of raw records.
    ///
    /// A 404 is reported as `not_found`, every other non-success status as
    /// a network error.
    fn get_records(
        &self,
        url: &str,
        query: &[(&str, &str)],
        not_found: ShowDirectoryError,
    ) -> Result<Vec<Value>, ShowDirectoryError> {
        debug!(%url, ?query, "requesting directory");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| ShowDirectoryError::NetworkError(e.to_string()))?;

        if response.status() == 404 {
            return Err(not_found);
        }

        if !response.status().is_success() {
            return Err(ShowDirectoryError::NetworkError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| ShowDirectoryError::ParseError(e.to_string()))
    }
}

impl Default for TvMazeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts one search hit into a `Show`.
///
/// A missing or empty image is replaced by [`MISSING_IMAGE_URL`] and a null
/// summary by empty text; only a hit without a usable id or name fails.
fn convert_search_hit(record: Value) -> Result<Show, RecordError> {
    let hit: TvMazeSearchHit = serde_json::from_value(record)?;
    let show = hit.show;

    let image = show
        .image
        .and_then(|image| image.original)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| MISSING_IMAGE_URL.to_string());

    Ok(Show {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    })
}

/// Converts one raw episode record into an `Episode`.
///
/// No field is ever substituted: the record either carries all of them or
/// it is rejected.
fn convert_episode(record: Value) -> Result<Episode, RecordError> {
    let episode: TvMazeEpisode = serde_json::from_value(record)?;

    if episode.season < 1 {
        return Err(RecordError::OutOfRange {
            field: "season",
            value: episode.season,
        });
    }
    if episode.number < 1 {
        return Err(RecordError::OutOfRange {
            field: "number",
            value: episode.number,
        });
    }

    Ok(Episode {
        id: episode.id,
        name: episode.name,
        season: episode.season,
        episode: episode.number,
        summary: episode.summary,
    })
}

/// Converts a search response, dropping hits that cannot be displayed.
fn convert_search_results(records: Vec<Value>) -> Vec<Show> {
    let total = records.len();
    let shows: Vec<Show> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match convert_search_hit(record) {
            Ok(show) => Some(show),
            Err(e) => {
                warn!(index, error = %e, "skipping search result");
                None
            }
        })
        .collect();

    debug!(total, kept = shows.len(), "converted search results");
    shows
}

/// Converts an episode list, dropping malformed records.
fn convert_episodes(show_id: u64, records: Vec<Value>) -> Vec<Episode> {
    let total = records.len();
    let episodes: Vec<Episode> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match convert_episode(record) {
            Ok(episode) => Some(episode),
            Err(e) => {
                warn!(show_id, index, error = %e, "skipping episode");
                None
            }
        })
        .collect();

    debug!(show_id, total, kept = episodes.len(), "converted episodes");
    episodes
}

impl ShowDirectory for TvMazeDirectory {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, ShowDirectoryError> {
        let url = format!("{}/search/shows", self.base_url);

        // The search endpoint answers unknown terms with an empty list, so a
        // 404 here means the API root itself is wrong.
        let records = self.get_records(
            &url,
            &[("q", term)],
            ShowDirectoryError::NetworkError(format!("HTTP 404 Not Found: {}", url)),
        )?;

        Ok(convert_search_results(records))
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ShowDirectoryError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let records = self.get_records(&url, &[], ShowDirectoryError::ShowNotFound(show_id))?;

        Ok(convert_episodes(show_id, records))
    }
}

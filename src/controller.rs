//! Form and event controller
//!
//! The controller owns the page and reacts to the two user interactions the
//! front end knows about: submitting a search and activating an element in
//! the show list. Each event issues at most one directory request and
//! performs at most one render.

use crate::page::{Element, Page};
use crate::rendering::{self, RenderError};
use crate::show_directory::{ShowDirectory, ShowDirectoryError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while handling an event
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The directory request failed
    #[error(transparent)]
    Directory(#[from] ShowDirectoryError),

    /// The response could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// User interactions handled by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search form was submitted with the given term
    SearchSubmitted(String),
    /// An element inside the show list container was activated
    Activated(Element),
}

/// What handling an event changed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The show list was replaced with this many units
    ShowsDisplayed(usize),
    /// The episode area now shows this many lines for the show
    EpisodesDisplayed { show_id: u64, count: usize },
    /// The event did not concern any handler; nothing changed
    Ignored,
}

/// Wires user events to a show directory and the renderers.
pub struct Controller<D: ShowDirectory> {
    directory: D,
    page: Page,
}

impl<D: ShowDirectory> Controller<D> {
    /// Creates a controller with an empty page: no shows, episode area hidden.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            page: Page::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Dispatches an event to its handler.
    ///
    /// On failure the page keeps its previous content, an inline status
    /// message describes the failure and the error is returned.
    pub fn handle(&mut self, event: Event) -> Result<Outcome, ControllerError> {
        let result = match event {
            Event::SearchSubmitted(term) => self.on_search_submitted(&term),
            Event::Activated(target) => self.on_show_list_activated(target),
        };

        match &result {
            Ok(Outcome::Ignored) => {}
            Ok(_) => self.page.clear_status(),
            Err(e) => {
                warn!(error = %e, "event failed");
                self.page.set_status(e.to_string());
            }
        }

        result
    }

    /// Convenience for `handle(Event::SearchSubmitted(..))`.
    pub fn submit_search(&mut self, term: &str) -> Result<Outcome, ControllerError> {
        self.handle(Event::SearchSubmitted(term.to_string()))
    }

    /// Convenience for activating the "Episodes" control of the unit at `index`.
    ///
    /// Returns `Outcome::Ignored` if there is no such unit.
    pub fn activate_episodes(&mut self, index: usize) -> Result<Outcome, ControllerError> {
        match self.page.shows().episodes_control(index) {
            Some(element) => self.handle(Event::Activated(element)),
            None => Ok(Outcome::Ignored),
        }
    }

    fn on_search_submitted(&mut self, term: &str) -> Result<Outcome, ControllerError> {
        info!(term, "searching shows");
        let shows = self.directory.search_shows(term)?;

        self.page.episodes_mut().hide();
        rendering::render_shows(&mut self.page, &shows)?;

        Ok(Outcome::ShowsDisplayed(shows.len()))
    }

    /// The single handler registered on the show list container.
    ///
    /// Units are replaced on every search, so the handler resolves the
    /// activated element to its enclosing unit at dispatch time and reads
    /// the show id from there.
    fn on_show_list_activated(&mut self, target: Element) -> Result<Outcome, ControllerError> {
        if !target.is_episodes_control() {
            return Ok(Outcome::Ignored);
        }

        let Some(show_id) = self
            .page
            .shows()
            .closest_unit(&target)
            .map(|unit| unit.show_id)
        else {
            debug!(?target, "activated element is no longer displayed");
            return Ok(Outcome::Ignored);
        };

        info!(show_id, "fetching episodes");
        let episodes = self.directory.fetch_episodes(show_id)?;
        rendering::render_episodes(&mut self.page, &episodes)?;

        Ok(Outcome::EpisodesDisplayed {
            show_id,
            count: episodes.len(),
        })
    }
}

//! Display surface module
//!
//! This module holds the in-memory page the renderers write into. The page
//! has three regions: the show list container, the episode area (hidden until
//! first populated) and a status line for inline error messages.
//!
//! Elements inside the show list are addressed by [`Element`] values. An
//! element is only valid for the render that produced it; once the show list
//! is replaced, elements from earlier renders no longer resolve.

use askama::Template;

/// A part of a show display unit that can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPart {
    /// The unit container itself
    Container,
    /// The poster image
    Image,
    /// The show title
    Title,
    /// The summary text
    Summary,
    /// The "Episodes" control
    EpisodesControl,
}

/// Reference to an element inside the show list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    generation: u64,
    unit: usize,
    part: UnitPart,
}

impl Element {
    /// The part of the unit this element refers to
    pub fn part(&self) -> UnitPart {
        self.part
    }

    /// Whether this element is an episodes control
    pub fn is_episodes_control(&self) -> bool {
        self.part == UnitPart::EpisodesControl
    }
}

/// One rendered block representing a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowUnit {
    /// Identifier of the show this unit was rendered for
    pub show_id: u64,
    pub name: String,
    pub summary: String,
    pub image: String,
    /// HTML markup of the unit
    pub markup: String,
}

/// One rendered line of the episode list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLine {
    /// The line as displayed, `"<name> - Season <season>, Number <episode>"`
    pub text: String,
    /// HTML markup of the line
    pub markup: String,
}

/// The container holding show display units.
#[derive(Debug, Default)]
pub struct ShowList {
    generation: u64,
    units: Vec<ShowUnit>,
}

impl ShowList {
    /// The currently displayed units, in display order
    pub fn units(&self) -> &[ShowUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Replaces all units, invalidating elements handed out before.
    pub fn replace(&mut self, units: Vec<ShowUnit>) {
        self.generation += 1;
        self.units = units;
    }

    /// Returns the element for `part` of the unit at `index`.
    pub fn element(&self, index: usize, part: UnitPart) -> Option<Element> {
        (index < self.units.len()).then_some(Element {
            generation: self.generation,
            unit: index,
            part,
        })
    }

    /// Returns the "Episodes" control of the unit at `index`.
    pub fn episodes_control(&self, index: usize) -> Option<Element> {
        self.element(index, UnitPart::EpisodesControl)
    }

    /// Resolves an element to the show unit enclosing it.
    ///
    /// Returns `None` for elements of a previous render.
    pub fn closest_unit(&self, element: &Element) -> Option<&ShowUnit> {
        if element.generation != self.generation {
            return None;
        }
        self.units.get(element.unit)
    }
}

/// The region holding episode lines, hidden until first populated.
#[derive(Debug, Default)]
pub struct EpisodeArea {
    visible: bool,
    lines: Vec<EpisodeLine>,
}

impl EpisodeArea {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn lines(&self) -> &[EpisodeLine] {
        &self.lines
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Replaces all lines without touching visibility.
    pub fn replace(&mut self, lines: Vec<EpisodeLine>) {
        self.lines = lines;
    }
}

/// The whole display surface.
#[derive(Debug, Default)]
pub struct Page {
    shows: ShowList,
    episodes: EpisodeArea,
    status: Option<String>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    units: &'a [ShowUnit],
    lines: &'a [EpisodeLine],
    episodes_visible: bool,
    status: Option<&'a str>,
}

impl Page {
    /// Creates an empty page: no shows, episode area hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows(&self) -> &ShowList {
        &self.shows
    }

    pub fn shows_mut(&mut self) -> &mut ShowList {
        &mut self.shows
    }

    pub fn episodes(&self) -> &EpisodeArea {
        &self.episodes
    }

    pub fn episodes_mut(&mut self) -> &mut EpisodeArea {
        &mut self.episodes
    }

    /// The inline status message, if the last action failed
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Renders the whole page as HTML markup.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        PageTemplate {
            units: &self.shows.units,
            lines: &self.episodes.lines,
            episodes_visible: self.episodes.visible,
            status: self.status.as_deref(),
        }
        .render()
    }
}

//! Rendering module
//!
//! Turns show and episode records into display units on a [`Page`]. Every
//! render replaces the previous content of its region; nothing is merged.

use crate::page::{EpisodeLine, Page, ShowUnit};
use crate::show_directory::{Episode, Show};
use askama::Template;
use thiserror::Error;

/// Errors that can occur while producing markup
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "show.html")]
struct ShowTemplate<'a> {
    id: u64,
    name: &'a str,
    summary: &'a str,
    image: &'a str,
}

#[derive(Template)]
#[template(path = "episode.html")]
struct EpisodeTemplate<'a> {
    text: &'a str,
}

/// Formats the display line of an episode.
///
/// # Examples
///
/// ```
/// use showfinder::{Episode, format_episode_line};
///
/// let episode = Episode {
///     id: 10144,
///     name: "Pilot".to_string(),
///     season: 1,
///     episode: 1,
///     summary: String::new(),
/// };
/// assert_eq!(format_episode_line(&episode), "Pilot - Season 1, Number 1");
/// ```
pub fn format_episode_line(episode: &Episode) -> String {
    format!(
        "{} - Season {}, Number {}",
        episode.name, episode.season, episode.episode
    )
}

fn show_unit(show: &Show) -> Result<ShowUnit, RenderError> {
    let markup = ShowTemplate {
        id: show.id,
        name: &show.name,
        summary: &show.summary,
        image: &show.image,
    }
    .render()?;

    Ok(ShowUnit {
        show_id: show.id,
        name: show.name.clone(),
        summary: show.summary.clone(),
        image: show.image.clone(),
        markup,
    })
}

fn episode_line(episode: &Episode) -> Result<EpisodeLine, RenderError> {
    let text = format_episode_line(episode);
    let markup = EpisodeTemplate { text: &text }.render()?;

    Ok(EpisodeLine { text, markup })
}

/// Replaces the show list with one unit per show, in input order.
///
/// The page is only touched once every unit rendered successfully.
pub fn render_shows(page: &mut Page, shows: &[Show]) -> Result<(), RenderError> {
    let units = shows.iter().map(show_unit).collect::<Result<Vec<_>, _>>()?;
    page.shows_mut().replace(units);
    Ok(())
}

/// Replaces the episode list with one line per episode and reveals the area.
pub fn render_episodes(page: &mut Page, episodes: &[Episode]) -> Result<(), RenderError> {
    let lines = episodes
        .iter()
        .map(episode_line)
        .collect::<Result<Vec<_>, _>>()?;

    let area = page.episodes_mut();
    area.replace(lines);
    area.show();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::show_directory::MISSING_IMAGE_URL;

    fn girls() -> Show {
        Show {
            id: 139,
            name: "Girls".to_string(),
            summary: "<p>This Emmy winning series is a comic look at ...</p>".to_string(),
            image: "https://static.tvmaze.com/uploads/images/original_untouched/31/78286.jpg"
                .to_string(),
        }
    }

    fn episode(id: u64, name: &str, season: u32, number: u32) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            season,
            episode: number,
            summary: String::new(),
        }
    }

    #[test]
    fn test_render_shows() {
        let mut page = Page::new();
        render_shows(&mut page, &[girls()]).unwrap();

        let units = page.shows().units();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].show_id, 139);
        assert_eq!(units[0].name, "Girls");
        assert!(units[0].image.ends_with("78286.jpg"));

        let markup = &units[0].markup;
        assert!(markup.contains("data-show-id=\"139\""));
        assert!(markup.contains("<h5 class=\"text-primary\">Girls</h5>"));
        assert!(markup.contains("src=\"https://static.tvmaze.com/uploads/images/original_untouched/31/78286.jpg\""));
        // Summaries are markup and are inserted as such
        assert!(markup.contains("<small><p>This Emmy winning series"));
        assert!(markup.contains("Show-getEpisodes"));
    }

    #[test]
    fn test_render_shows_escapes_name() {
        let mut page = Page::new();
        let show = Show {
            id: 1,
            name: "Law & Order <SVU>".to_string(),
            summary: String::new(),
            image: MISSING_IMAGE_URL.to_string(),
        };
        render_shows(&mut page, &[show]).unwrap();

        let markup = &page.shows().units()[0].markup;
        assert!(markup.contains("Law &#38; Order &#60;SVU&#62;"));
        assert!(!markup.contains("<SVU>"));
    }

    #[test]
    fn test_render_shows_preserves_order() {
        let mut page = Page::new();
        let shows: Vec<Show> = [3, 1, 2]
            .into_iter()
            .map(|id| Show {
                id,
                ..girls()
            })
            .collect();

        render_shows(&mut page, &shows).unwrap();

        let ids: Vec<u64> = page.shows().units().iter().map(|u| u.show_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_render_empty_shows_clears_display() {
        let mut page = Page::new();
        render_shows(&mut page, &[girls()]).unwrap();
        assert_eq!(page.shows().units().len(), 1);

        render_shows(&mut page, &[]).unwrap();
        assert!(page.shows().is_empty());

        render_shows(&mut page, &[]).unwrap();
        assert!(page.shows().is_empty());
    }

    #[test]
    fn test_render_episodes() {
        let mut page = Page::new();
        let episodes = vec![
            episode(10144, "Pilot", 1, 1),
            episode(10145, "Vagina Panic", 1, 2),
            episode(10155, "It's About Time", 2, 1),
        ];

        render_episodes(&mut page, &episodes).unwrap();

        assert!(page.episodes().is_visible());
        let texts: Vec<&str> = page
            .episodes()
            .lines()
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Pilot - Season 1, Number 1",
                "Vagina Panic - Season 1, Number 2",
                "It's About Time - Season 2, Number 1",
            ]
        );
        assert!(page.episodes().lines()[0].markup.starts_with("<li>Pilot - Season 1, Number 1</li>"));
    }

    #[test]
    fn test_render_episodes_is_idempotent() {
        let episodes = vec![episode(1, "Pilot", 1, 1), episode(2, "Second", 1, 2)];

        let mut once = Page::new();
        render_episodes(&mut once, &episodes).unwrap();

        let mut twice = Page::new();
        render_episodes(&mut twice, &episodes).unwrap();
        render_episodes(&mut twice, &episodes).unwrap();

        assert_eq!(once.episodes().lines(), twice.episodes().lines());
        assert_eq!(once.episodes().is_visible(), twice.episodes().is_visible());
    }

    #[test]
    fn test_render_episodes_replaces_previous_list() {
        let mut page = Page::new();
        render_episodes(&mut page, &[episode(1, "Old", 1, 1), episode(2, "Older", 1, 2)]).unwrap();
        render_episodes(&mut page, &[episode(3, "New", 3, 7)]).unwrap();

        let lines = page.episodes().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "New - Season 3, Number 7");
    }
}

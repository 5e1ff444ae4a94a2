use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::entry::CatalogEntry;

/// Earliest accepted release year (first motion pictures).
pub const MIN_RELEASE_YEAR: i32 = 1880;
pub const MAX_RELEASE_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("Release year must be a valid integer between 1880 and 2100, got {year}")]
    InvalidYear { year: i32 },

    #[error("Title must not be empty")]
    EmptyTitle,

    /// The record is neither a movie nor an episode, or is missing the
    /// fields its kind requires.
    #[error("Only movies or tv series episodes can be added, got {kind:?}")]
    InvalidItemKind { kind: String },
}

/// Discriminates a standalone title from one episode of a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Episode { season: u32, episode: u32 },
}

/// A catalog entry. Fields are private so every value in existence has
/// passed year and title validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogEntry", into = "CatalogEntry")]
pub struct MediaItem {
    title: String,
    release_year: i32,
    genre: String,
    views: u64,
    kind: MediaKind,
}

impl MediaItem {
    pub fn movie(
        title: impl Into<String>,
        release_year: i32,
        genre: impl Into<String>,
        views: u64,
    ) -> Result<Self, ItemError> {
        Self::new(title.into(), release_year, genre.into(), views, MediaKind::Movie)
    }

    pub fn episode(
        title: impl Into<String>,
        release_year: i32,
        genre: impl Into<String>,
        views: u64,
        season: u32,
        episode: u32,
    ) -> Result<Self, ItemError> {
        Self::new(
            title.into(),
            release_year,
            genre.into(),
            views,
            MediaKind::Episode { season, episode },
        )
    }

    /// Validates before building, so a rejected item never exists.
    pub fn new(
        title: String,
        release_year: i32,
        genre: String,
        views: u64,
        kind: MediaKind,
    ) -> Result<Self, ItemError> {
        validate_release_year(release_year)?;
        if title.trim().is_empty() {
            return Err(ItemError::EmptyTitle);
        }

        Ok(Self {
            title,
            release_year,
            genre,
            views,
            kind,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn is_episode(&self) -> bool {
        matches!(self.kind, MediaKind::Episode { .. })
    }

    pub fn is_movie(&self) -> bool {
        self.kind == MediaKind::Movie
    }

    pub fn season_no(&self) -> Option<u32> {
        match self.kind {
            MediaKind::Episode { season, .. } => Some(season),
            MediaKind::Movie => None,
        }
    }

    pub fn episode_no(&self) -> Option<u32> {
        match self.kind {
            MediaKind::Episode { episode, .. } => Some(episode),
            MediaKind::Movie => None,
        }
    }

    /// Registers a single playback.
    pub fn play(&mut self) {
        self.add_views(1);
    }

    pub fn add_views(&mut self, amount: u64) {
        self.views = self.views.saturating_add(amount);
    }
}

pub fn validate_release_year(year: i32) -> Result<(), ItemError> {
    if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(ItemError::InvalidYear { year })
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MediaKind::Movie => write!(f, "{} ({})", self.title, self.release_year),
            MediaKind::Episode { season, episode } => {
                write!(f, "{} S{:02}E{:02}", self.title, season, episode)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_render() {
        let movie = MediaItem::movie("Inception", 2010, "Sci-Fi", 1_000_000).unwrap();
        assert_eq!(movie.to_string(), "Inception (2010)");
        assert!(movie.is_movie());
        assert_eq!(movie.season_no(), None);
    }

    #[test]
    fn test_episode_render_is_zero_padded() {
        let episode = MediaItem::episode("Breaking Bad", 2008, "Crime", 4_000_000, 5, 12).unwrap();
        assert_eq!(episode.to_string(), "Breaking Bad S05E12");

        let pilot = MediaItem::episode("Stranger Things", 2016, "Horror", 0, 1, 3).unwrap();
        assert_eq!(pilot.to_string(), "Stranger Things S01E03");
        assert_eq!(pilot.season_no(), Some(1));
        assert_eq!(pilot.episode_no(), Some(3));
    }

    #[test]
    fn test_release_year_bounds() {
        assert!(MediaItem::movie("Edge", 1880, "Drama", 0).is_ok());
        assert!(MediaItem::movie("Edge", 2100, "Drama", 0).is_ok());
        assert_eq!(
            MediaItem::movie("Too Early", 1879, "Drama", 0),
            Err(ItemError::InvalidYear { year: 1879 })
        );
        assert_eq!(
            MediaItem::episode("Too Late", 2101, "Drama", 0, 1, 1),
            Err(ItemError::InvalidYear { year: 2101 })
        );
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(MediaItem::movie("   ", 2000, "Drama", 0), Err(ItemError::EmptyTitle));
    }

    #[test]
    fn test_play_increments_views() {
        let mut movie = MediaItem::movie("The Matrix", 1999, "Action", 2_000_000).unwrap();
        movie.play();
        movie.play();
        assert_eq!(movie.views(), 2_000_002);
    }

    #[test]
    fn test_add_views_saturates() {
        let mut movie = MediaItem::movie("Forever", 2000, "Drama", u64::MAX - 1).unwrap();
        movie.add_views(10);
        assert_eq!(movie.views(), u64::MAX);
    }
}

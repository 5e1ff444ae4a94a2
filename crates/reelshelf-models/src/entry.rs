use serde::{Deserialize, Serialize};

use crate::media::{ItemError, MediaItem, MediaKind};

/// Untyped catalog record, as written in a config file or received from any
/// other loosely-typed source. `kind` is free text until converted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: String,
    pub title: String,
    pub release_year: i32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
}

impl CatalogEntry {
    pub fn to_item(&self) -> Result<MediaItem, ItemError> {
        MediaItem::try_from(self.clone())
    }

    fn media_kind(&self) -> Result<MediaKind, ItemError> {
        match self.kind.trim().to_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "episode" | "tv series" => match (self.season, self.episode) {
                (Some(season), Some(episode)) => Ok(MediaKind::Episode { season, episode }),
                _ => Err(ItemError::InvalidItemKind {
                    kind: format!("{} (missing season or episode number)", self.kind),
                }),
            },
            _ => Err(ItemError::InvalidItemKind {
                kind: self.kind.clone(),
            }),
        }
    }
}

impl TryFrom<CatalogEntry> for MediaItem {
    type Error = ItemError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        let kind = entry.media_kind()?;
        MediaItem::new(entry.title, entry.release_year, entry.genre, entry.views, kind)
    }
}

impl From<MediaItem> for CatalogEntry {
    fn from(item: MediaItem) -> Self {
        CatalogEntry {
            kind: if item.is_episode() { "episode" } else { "movie" }.to_string(),
            title: item.title().to_string(),
            release_year: item.release_year(),
            genre: item.genre().to_string(),
            views: item.views(),
            season: item.season_no(),
            episode: item.episode_no(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: &str, season: Option<u32>, episode: Option<u32>) -> CatalogEntry {
        CatalogEntry {
            kind: kind.to_string(),
            title: "Dark".to_string(),
            release_year: 2017,
            genre: "Sci-Fi".to_string(),
            views: 42,
            season,
            episode,
        }
    }

    #[test]
    fn test_movie_entry_converts() {
        let item = entry("Movie", None, None).to_item().unwrap();
        assert!(item.is_movie());
        assert_eq!(item.views(), 42);
    }

    #[test]
    fn test_episode_entry_converts() {
        let item = entry("episode", Some(2), Some(7)).to_item().unwrap();
        assert_eq!(item.to_string(), "Dark S02E07");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = entry("podcast", None, None).to_item().unwrap_err();
        assert_eq!(err, ItemError::InvalidItemKind { kind: "podcast".to_string() });
    }

    #[test]
    fn test_episode_without_numbers_rejected() {
        let err = entry("episode", Some(1), None).to_item().unwrap_err();
        assert!(matches!(err, ItemError::InvalidItemKind { .. }));
    }

    #[test]
    fn test_invalid_year_checked_after_kind() {
        let mut bad = entry("movie", None, None);
        bad.release_year = 1700;
        assert_eq!(bad.to_item(), Err(ItemError::InvalidYear { year: 1700 }));
    }

    #[test]
    fn test_media_item_deserialization_validates() {
        let json = r#"{"kind":"movie","title":"Metropolis","release_year":1850}"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());

        let json =
            r#"{"kind":"episode","title":"Lost","release_year":2004,"season":1,"episode":1}"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.to_string(), "Lost S01E01");
        assert_eq!(item.views(), 0);
    }
}

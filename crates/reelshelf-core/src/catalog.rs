use reelshelf_models::{CatalogEntry, MediaItem, MediaKind};
use reelshelf_models::media::validate_release_year;
use reelshelf_models::ItemError;
use tracing::{debug, info, warn};

use crate::error::CatalogError;


/// Append-only, insertion-ordered collection of movies and episodes.
///
/// Duplicate titles are allowed: several episodes of one series share a
/// title, and the same movie may be listed twice.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an already validated item and returns its position.
    pub fn register(&mut self, item: MediaItem) -> usize {
        debug!(title = item.title(), episode = item.is_episode(), "Registering item");
        self.items.push(item);
        self.items.len() - 1
    }

    /// Validates an untyped record and appends it. Nothing is stored on failure.
    pub fn register_entry(&mut self, entry: &CatalogEntry) -> Result<usize, CatalogError> {
        match entry.to_item() {
            Ok(item) => Ok(self.register(item)),
            Err(e) => {
                warn!(title = %entry.title, kind = %entry.kind, "Rejected catalog entry: {}", e);
                Err(e.into())
            }
        }
    }

    /// Registers a batch of records. Every record is converted before the
    /// first one is stored, so a failed batch leaves the catalog untouched.
    pub fn extend_entries<'a, I>(&mut self, entries: I) -> Result<usize, CatalogError>
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        let batch = entries
            .into_iter()
            .map(|entry| {
                entry.to_item().inspect_err(|e| {
                    warn!(
                        title = %entry.title,
                        kind = %entry.kind,
                        "Rejected catalog entry: {}",
                        e
                    );
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let added = batch.len();
        self.extend(batch);
        Ok(added)
    }

    /// Adds episodes 1..=count of one season, all with zero views.
    ///
    /// Every argument is checked before the first episode is appended, so a
    /// failed batch leaves the catalog untouched.
    pub fn add_season(
        &mut self,
        title: &str,
        release_year: i32,
        genre: &str,
        season: u32,
        count: u32,
    ) -> Result<usize, CatalogError> {
        if count == 0 {
            return Err(CatalogError::InvalidEpisodeCount { count });
        }
        validate_release_year(release_year)?;
        if title.trim().is_empty() {
            return Err(ItemError::EmptyTitle.into());
        }

        let batch = (1..=count)
            .map(|episode| {
                MediaItem::new(
                    title.to_string(),
                    release_year,
                    genre.to_string(),
                    0,
                    MediaKind::Episode { season, episode },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.items.extend(batch);
        info!(title, season, count, "Added season to catalog");
        Ok(count as usize)
    }

    /// Every item in insertion order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn play(&mut self, index: usize) -> Result<&MediaItem, CatalogError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CatalogError::ItemNotFound { index, len })?;
        item.play();
        Ok(item)
    }

    /// Plain movies sorted by title. The sort is stable, so equal titles keep
    /// insertion order.
    pub fn movies(&self) -> Vec<&MediaItem> {
        self.sorted_by_title(MediaItem::is_movie)
    }

    /// Episodes sorted by title, stable like [`Catalog::movies`].
    pub fn episodes(&self) -> Vec<&MediaItem> {
        self.sorted_by_title(MediaItem::is_episode)
    }

    pub fn count_episodes(&self, title: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.is_episode() && item.title() == title)
            .count()
    }

    fn sorted_by_title(&self, keep: fn(&MediaItem) -> bool) -> Vec<&MediaItem> {
        let mut selected: Vec<&MediaItem> = self.items.iter().filter(|item| keep(item)).collect();
        selected.sort_by(|a, b| a.title().cmp(b.title()));
        selected
    }

    pub(crate) fn items_mut(&mut self) -> &mut [MediaItem] {
        &mut self.items
    }
}

impl Extend<MediaItem> for Catalog {
    fn extend<T: IntoIterator<Item = MediaItem>>(&mut self, iter: T) {
        for item in iter {
            self.register(item);
        }
    }
}

impl FromIterator<MediaItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = MediaItem>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

//! Randomized view activity, used to make demo rankings interesting.

use rand::Rng;
use reelshelf_models::MediaItem;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;

pub const VIEW_INCREMENT_MIN: u64 = 1;
pub const VIEW_INCREMENT_MAX: u64 = 100;
pub const DEFAULT_VIEW_BATCH: usize = 10;

/// One simulated bump: which item, by how much, and its total afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewUpdate {
    pub index: usize,
    pub title: String,
    pub increment: u64,
    pub views: u64,
}

impl Catalog {
    /// Picks one item uniformly and adds between 1 and 100 views to it.
    pub fn generate_random_view_with<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<&MediaItem, CatalogError> {
        let update = self.apply_random_view(rng)?;
        Ok(&self.items()[update.index])
    }

    pub fn generate_random_view(&mut self) -> Result<&MediaItem, CatalogError> {
        self.generate_random_view_with(&mut rand::rng())
    }

    /// Runs `n` independent picks. The same item may be picked more than once.
    pub fn generate_random_views_batch_with<R: Rng>(
        &mut self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<ViewUpdate>, CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        (0..n).map(|_| self.apply_random_view(rng)).collect()
    }

    pub fn generate_random_views_batch(
        &mut self,
        n: usize,
    ) -> Result<Vec<ViewUpdate>, CatalogError> {
        self.generate_random_views_batch_with(n, &mut rand::rng())
    }

    fn apply_random_view<R: Rng>(&mut self, rng: &mut R) -> Result<ViewUpdate, CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let index = rng.random_range(0..self.len());
        let increment = rng.random_range(VIEW_INCREMENT_MIN..=VIEW_INCREMENT_MAX);

        let item = &mut self.items_mut()[index];
        item.add_views(increment);
        debug!(title = item.title(), increment, views = item.views(), "Simulated views");

        Ok(ViewUpdate {
            index,
            title: item.title().to_string(),
            increment,
            views: item.views(),
        })
    }
}

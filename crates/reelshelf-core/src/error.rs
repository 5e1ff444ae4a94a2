use reelshelf_models::{InvalidContentKind, ItemError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Covers invalid release years, empty titles and unknown item kinds.
    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    InvalidContentKind(#[from] InvalidContentKind),

    #[error("Catalog is empty, nothing to pick from")]
    EmptyCatalog,

    #[error("Number of episodes must be greater than zero, got {count}")]
    InvalidEpisodeCount { count: u32 },

    #[error("No item at position {index} (catalog holds {len})")]
    ItemNotFound { index: usize, len: usize },
}

impl CatalogError {
    pub fn is_invalid_year(&self) -> bool {
        matches!(self, CatalogError::Item(ItemError::InvalidYear { .. }))
    }

    pub fn is_invalid_item_kind(&self) -> bool {
        matches!(self, CatalogError::Item(ItemError::InvalidItemKind { .. }))
    }
}

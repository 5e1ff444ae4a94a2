use reelshelf_models::MediaItem;

use crate::catalog::Catalog;

/// Result of an exact-title search. `Found` always carries at least one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Found(Vec<&'a MediaItem>),
    NotFound,
}

impl<'a> SearchOutcome<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn items(&self) -> &[&'a MediaItem] {
        match self {
            SearchOutcome::Found(items) => items,
            SearchOutcome::NotFound => &[],
        }
    }
}

impl Catalog {
    /// Movies and episodes whose title equals `title` exactly, in insertion order.
    pub fn search(&self, title: &str) -> SearchOutcome<'_> {
        let matches: Vec<&MediaItem> = self
            .items()
            .iter()
            .filter(|item| item.title() == title)
            .collect();
        if matches.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Found(matches)
        }
    }
}

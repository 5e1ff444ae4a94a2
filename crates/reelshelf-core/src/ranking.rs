use reelshelf_models::{ContentKind, MediaItem};

use crate::catalog::Catalog;
use crate::error::CatalogError;

impl Catalog {
    /// The `count` most viewed movies or episodes.
    ///
    /// Starts from the title-sorted listing and sorts it by views descending
    /// with a stable sort, so ties stay in title order. A `count` past the
    /// end returns the whole list.
    pub fn top_titles(&self, kind: ContentKind, count: usize) -> Vec<&MediaItem> {
        let mut ranked = match kind {
            ContentKind::Movie => self.movies(),
            ContentKind::TvSeries => self.episodes(),
        };
        ranked.sort_by(|a, b| b.views().cmp(&a.views()));
        ranked.truncate(count);
        ranked
    }

    /// Same as [`Catalog::top_titles`] with the kind given as text
    /// (`"movie"` or `"tv series"`, any case).
    pub fn top_titles_str(
        &self,
        kind: &str,
        count: usize,
    ) -> Result<Vec<&MediaItem>, CatalogError> {
        let kind: ContentKind = kind.parse()?;
        Ok(self.top_titles(kind, count))
    }
}

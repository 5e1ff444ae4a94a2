pub mod content_kind;
pub mod entry;
pub mod media;

pub use content_kind::{ContentKind, InvalidContentKind};
pub use entry::CatalogEntry;
pub use media::{ItemError, MediaItem, MediaKind, MAX_RELEASE_YEAR, MIN_RELEASE_YEAR};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reelshelf_models::{ContentKind, MediaItem};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::simulation::ViewUpdate;

/// Thread-safe handle to a [`Catalog`].
///
/// Each method holds the lock for its whole body, so a random pick and the
/// view bump it causes can't interleave with a concurrent registration.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    // Catalog operations never panic mid-update, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn register(&self, item: MediaItem) -> usize {
        self.lock().register(item)
    }

    pub fn generate_random_view(&self) -> Result<MediaItem, CatalogError> {
        self.lock().generate_random_view().cloned()
    }

    pub fn generate_random_views_batch(&self, n: usize) -> Result<Vec<ViewUpdate>, CatalogError> {
        self.lock().generate_random_views_batch(n)
    }

    pub fn top_titles(&self, kind: ContentKind, count: usize) -> Vec<MediaItem> {
        self.lock().top_titles(kind, count).into_iter().cloned().collect()
    }

    /// Copy of every item in insertion order.
    pub fn snapshot(&self) -> Vec<MediaItem> {
        self.lock().items().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_registration_and_views() {
        let shared = SharedCatalog::default();
        shared.register(MediaItem::movie("Seed", 2000, "Drama", 0).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let title = format!("Movie {}-{}", n, i);
                        shared.register(MediaItem::movie(title, 2000, "Drama", 0).unwrap());
                        shared.generate_random_view().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 101);
        let total: u64 = shared.snapshot().iter().map(MediaItem::views).sum();
        assert!(total >= 100);
        assert!(total <= 100 * 100);
    }

    #[test]
    fn test_empty_shared_catalog_reports_error() {
        let shared = SharedCatalog::default();
        assert_eq!(shared.generate_random_view(), Err(CatalogError::EmptyCatalog));
        assert!(shared.is_empty());
    }
}

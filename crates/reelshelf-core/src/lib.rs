pub mod catalog;
pub mod error;
pub mod ranking;
pub mod search;
pub mod shared;
pub mod simulation;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use search::SearchOutcome;
pub use shared::SharedCatalog;
pub use simulation::{ViewUpdate, DEFAULT_VIEW_BATCH, VIEW_INCREMENT_MAX, VIEW_INCREMENT_MIN};

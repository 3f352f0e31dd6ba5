pub mod catalog;
pub mod config;
pub mod models;
pub mod selection;
pub mod session;

pub use catalog::{Catalog, CatalogSource, CriteriaPatch, FilterCriteria};
pub use models::{AmenityIcon, Listing, RoomType};
pub use selection::{ComparisonSet, Favorites, SelectionManager, COMPARISON_CAPACITY};
pub use session::Session;

pub mod criteria;
pub mod source;
pub mod store;

pub use criteria::{parse_price_bound, CriteriaPatch, FilterCriteria};
pub use source::{CatalogSource, JsonFileCatalog, SampleCatalog};
pub use store::{filter_listings, Catalog, CatalogStore};

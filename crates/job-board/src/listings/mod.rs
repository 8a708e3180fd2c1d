//! Listing store and the search/filter pipeline behind the `/jobs` page.

pub mod domain;
pub mod facets;
pub mod filter;
mod fixtures;
mod import;
pub mod page;
pub mod router;
pub mod search;
mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{Facet, FacetOption, FacetOptions, JobId, JobRecord, SortOrder};
pub use facets::FacetSelection;
pub use filter::{filter_listings, FilterPipeline, FilterQuery};
pub use fixtures::standard_listings;
pub use import::{ListingImportError, ListingImporter};
pub use page::ListingPage;
pub use router::listing_router;
pub use search::{SearchInput, SearchQuery};
pub use store::{ListingStore, ListingStoreError};

//! Browsing core for a student placement portal: job board, company
//! directory, training catalog, chat/events hub, interview practice and
//! resume scanner, all built on one list-filter-select view controller.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod interview;
pub mod metrics;
pub mod models;
pub mod nav;
pub mod profile;
pub mod scanner;
pub mod selection;
pub mod view;

pub use catalog::{BundledCatalog, Catalog, CatalogSource, Collection, JsonFileCatalog};
pub use error::PlacementError;
pub use filter::{ALL, FilterState, Record, filtered_view, matches};
pub use selection::Selection;
pub use view::{ListView, Presenter, ViewEvent, ViewSnapshot};

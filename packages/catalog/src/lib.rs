//! # Pagewright Block Catalog
//!
//! The static set of block types a page can be built from: each
//! [`BlockDefinition`] names a type, the library category it is listed under
//! and the default props a freshly dropped block starts with.
//!
//! The catalog is an ordinary value. Build it once with
//! [`BlockCatalog::builtin`] (or [`BlockCatalog::new`] for a reduced or custom
//! set) and hand it to the editor and renderer.
//!
//! ```rust
//! use pagewright_catalog::{BlockCatalog, CatalogFilter};
//!
//! let catalog = BlockCatalog::builtin();
//! let filter = CatalogFilter::new().category("media").search("video");
//! let found = catalog.list_definitions(Some(&filter));
//! assert_eq!(found[0].block_type, "video");
//! ```

mod builtin;
mod catalog;
mod definition;
mod error;
mod kind;

pub use catalog::{BlockCatalog, BlockCategory, CatalogFilter, ALL_CATEGORY};
pub use definition::BlockDefinition;
pub use error::CatalogError;
pub use kind::BlockKind;

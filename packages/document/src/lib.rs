//! # Pagewright Document Model
//!
//! A page is an ordered sequence of [`PageBlock`]s plus [`GlobalStyles`].
//! [`PageDocument`] is the editing model: every operation returns a new
//! document and leaves its input untouched. [`SiteData`] is the persisted
//! JSON shape and the only storage contract.
//!
//! ```rust
//! use pagewright_catalog::BlockCatalog;
//! use pagewright_document::PageDocument;
//!
//! let catalog = BlockCatalog::builtin();
//! let hero = catalog.definition_for_type("hero").unwrap();
//!
//! let doc = PageDocument::new().insert_block(hero, 0);
//! assert_eq!(doc.len(), 1);
//! assert!(doc.blocks()[0].is_visible());
//! ```
//!
//! Also here: template seeding ([`starter_document`]), typed props access
//! ([`props`]) and consistency checks over stored data ([`check`]).

mod block;
mod check;
mod document;
mod errors;
mod id;
pub mod props;
mod seed;
mod site;
mod site_data;
mod styles;

pub use block::{PageBlock, Props};
pub use check::{check, Diagnostic, DiagnosticLevel};
pub use document::PageDocument;
pub use errors::{DocumentError, PathError};
pub use id::generate_block_id;
pub use props::{PathSegment, PropsReader};
pub use seed::{starter_document, TemplateSeed};
pub use site::{Site, SiteStatus};
pub use site_data::SiteData;
pub use styles::GlobalStyles;

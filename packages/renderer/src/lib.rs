//! # Pagewright Block Renderer
//!
//! Maps each block's declared type to a [`VNode`] tree. The tree serializes
//! to preview markup with [`VNode::to_html`] and exposes its visible text
//! through [`VNode::text_content`].
//!
//! Rendering never fails. Missing props fall back to defaults, out-of-range
//! column counts are clamped and an unknown type renders a visible
//! placeholder.
//!
//! ```rust
//! use pagewright_catalog::BlockCatalog;
//! use pagewright_document::PageDocument;
//! use pagewright_renderer::{RenderContext, Renderer};
//!
//! let catalog = BlockCatalog::builtin();
//! let renderer = Renderer::new(&catalog);
//!
//! let doc = PageDocument::new().insert_block(catalog.definition_for_type("hero").unwrap(), 0);
//! let html = renderer.render_page(&doc, &RenderContext::preview()).to_html();
//! assert!(html.contains("Welcome to Our Business"));
//! ```

mod blocks;
mod carousel;
mod context;
mod embed;
pub mod html;
mod page;
mod renderer;
mod vdom;

pub use carousel::CarouselState;
pub use context::RenderContext;
pub use embed::embed_url;
pub use html::escape_html;
pub use renderer::Renderer;
pub use vdom::VNode;

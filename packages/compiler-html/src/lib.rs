//! # Pagewright HTML Compiler
//!
//! Publishes a page as one standalone HTML5 document. Global styles are
//! inlined as document-level CSS rules.
//!
//! Only the hero and the titled section types (`text`, `services`,
//! `contact`, `cta`) have a published form. They produce the same visible
//! text as the editor preview: plain props are escaped, `text.content` is
//! passed through as markup, and missing props take the preview defaults.
//!
//! ```rust
//! use pagewright_catalog::BlockCatalog;
//! use pagewright_compiler_html::{compile_to_html, CompileOptions};
//! use pagewright_document::PageDocument;
//!
//! let catalog = BlockCatalog::builtin();
//! let doc = PageDocument::new().insert_block(catalog.definition_for_type("hero").unwrap(), 0);
//!
//! let html = compile_to_html(&doc, &CompileOptions::default()).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<h1>Welcome to Our Business</h1>"));
//! ```

mod compiler;

pub use compiler::{compile_to_html, is_publishable, CompileError, CompileOptions};

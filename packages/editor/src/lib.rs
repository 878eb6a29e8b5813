//! # Pagewright Editor
//!
//! Editing engine for a single page: commands, history, drag insertion and
//! save tracking.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: block definitions + default props  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Apply commands to an immutable document  │
//! │  - Snapshot history (undo/redo, batches)    │
//! │  - Drag insertion index + drop indicator    │
//! │  - Selection, preview mode, carousels       │
//! │  - Save tickets (stale responses ignored)   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: PageDocument + RenderContext      │
//! │           → VNode canvas                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every command yields a new document
//! 2. **Array position is order**: `order` stamps are derived at save time
//! 3. **No-ops record nothing**: history only grows when the blocks change
//! 4. **Layout stays outside**: the canvas reports block bounds, the engine
//!    only does arithmetic on them
//!
//! ## Usage
//!
//! ```rust
//! use pagewright_catalog::BlockCatalog;
//! use pagewright_document::PageDocument;
//! use pagewright_editor::{EditCommand, EditSession};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(BlockCatalog::builtin());
//! let mut session = EditSession::new(catalog, PageDocument::new());
//!
//! session
//!     .execute(EditCommand::InsertBlock {
//!         definition_id: "hero-section".to_string(),
//!         index: Some(0),
//!     })
//!     .unwrap();
//! assert_eq!(session.document().len(), 1);
//!
//! session.undo();
//! assert!(session.document().is_empty());
//! ```

mod drag;
mod errors;
mod generate;
mod history;
mod mutations;
mod save;
mod session;
mod store;

pub use drag::{insertion_index, BlockBounds, DragState, DropIndicator, DropOutcome};
pub use errors::EditorError;
pub use generate::{props_from_response, ContentGenerator, GenerateError};
pub use history::{History, HistorySnapshot, DEFAULT_MAX_LEVELS};
pub use mutations::{Applied, CommandError, EditCommand};
pub use save::{SaveStatus, SaveTicket, SaveTracker};
pub use session::{EditSession, Viewport};
pub use store::{FileSiteStore, MemorySiteStore, SiteStore, StoreError};

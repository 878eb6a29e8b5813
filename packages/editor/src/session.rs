//! # Edit Session
//!
//! One user editing one page. Owns the live document, its history, the
//! selection, drag tracking, carousel cursors and save status, and turns
//! them into a [`RenderContext`] for the canvas.

use crate::drag::{BlockBounds, DragState};
use crate::errors::EditorError;
use crate::generate::ContentGenerator;
use crate::history::{History, HistorySnapshot, DEFAULT_MAX_LEVELS};
use crate::mutations::{CommandError, EditCommand};
use crate::save::{SaveStatus, SaveTicket, SaveTracker};
use crate::store::SiteStore;
use pagewright_catalog::BlockCatalog;
use pagewright_document::{GlobalStyles, PageBlock, PageDocument, Props, PropsReader, Site, SiteData};
use pagewright_renderer::{CarouselState, RenderContext};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Canvas width the page is previewed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    pub fn width(&self) -> &'static str {
        match self {
            Viewport::Desktop => "100%",
            Viewport::Tablet => "768px",
            Viewport::Mobile => "375px",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viewport::Desktop => f.write_str("desktop"),
            Viewport::Tablet => f.write_str("tablet"),
            Viewport::Mobile => f.write_str("mobile"),
        }
    }
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(Viewport::Desktop),
            "tablet" => Ok(Viewport::Tablet),
            "mobile" => Ok(Viewport::Mobile),
            other => Err(format!("unknown viewport: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditSession {
    catalog: Arc<BlockCatalog>,

    document: PageDocument,

    history: History,

    selected: Option<String>,

    drag: DragState,

    carousels: HashMap<String, CarouselState>,

    preview_mode: bool,

    viewport: Viewport,

    save: SaveTracker,

    /// Bumped on every change to the document, including undo and redo
    revision: u64,
}

impl EditSession {
    pub fn new(catalog: Arc<BlockCatalog>, document: PageDocument) -> Self {
        Self::with_history_limit(catalog, document, DEFAULT_MAX_LEVELS)
    }

    /// `limit` is the number of snapshots kept (0 = unlimited)
    pub fn with_history_limit(catalog: Arc<BlockCatalog>, document: PageDocument, limit: usize) -> Self {
        let history = History::with_max_levels(document.blocks().to_vec(), limit);
        Self {
            catalog,
            document,
            history,
            selected: None,
            drag: DragState::new(),
            carousels: HashMap::new(),
            preview_mode: false,
            viewport: Viewport::default(),
            save: SaveTracker::new(),
            revision: 0,
        }
    }

    /// Start editing a stored site
    pub fn open(catalog: Arc<BlockCatalog>, site: &Site) -> Self {
        let document = site.document();
        info!(site_id = site.id, blocks = document.len(), "Opened site");
        Self::new(catalog, document)
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- Commands ----

    /// Apply a command and record it. Returns false for a no-op.
    pub fn execute(&mut self, command: EditCommand) -> Result<bool, CommandError> {
        let applied = command.apply(&self.document, &self.catalog)?;
        if !applied.changed {
            debug!(command = %command.describe(), "Command changed nothing");
            return Ok(false);
        }

        self.flush_live_edits();
        self.document = applied.document;
        self.revision += 1;
        self.history
            .record(HistorySnapshot::new(self.document.blocks().to_vec()).with_description(command.describe()));

        if let Some(block_id) = applied.select {
            self.selected = Some(block_id);
        }
        self.forget_missing_blocks();
        Ok(true)
    }

    /// Live edits not yet committed become their own step first, so undo
    /// reverts them before anything older
    pub fn undo(&mut self) -> bool {
        self.flush_live_edits();
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        let blocks = snapshot.blocks.clone();
        self.restore(blocks);
        true
    }

    /// Pending live edits are committed first, which discards the redo tail
    pub fn redo(&mut self) -> bool {
        self.flush_live_edits();
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        let blocks = snapshot.blocks.clone();
        self.restore(blocks);
        true
    }

    fn restore(&mut self, blocks: Vec<PageBlock>) {
        self.document = self.document.with_blocks(blocks);
        self.revision += 1;
        self.forget_missing_blocks();
    }

    /// Drop selection and carousel state for blocks that no longer exist
    fn forget_missing_blocks(&mut self) {
        if let Some(selected) = &self.selected {
            if !self.document.contains(selected) {
                self.selected = None;
            }
        }
        let document = &self.document;
        self.carousels.retain(|block_id, _| document.contains(block_id));
    }

    // ---- Props editing ----

    /// Apply a props change without recording it, for edits in progress
    /// (typing in a field). Follow with [`commit_props`](Self::commit_props).
    pub fn edit_props_live(&mut self, block_id: &str, props: Props) -> Result<bool, CommandError> {
        let command = EditCommand::UpdateProps {
            block_id: block_id.to_string(),
            props,
        };
        let applied = command.apply(&self.document, &self.catalog)?;
        if applied.changed {
            self.document = applied.document;
            self.revision += 1;
        }
        Ok(applied.changed)
    }

    /// Apply a props change and record everything since the last snapshot
    /// as one step
    pub fn commit_props(&mut self, block_id: &str, props: Props) -> Result<bool, CommandError> {
        self.edit_props_live(block_id, props)?;
        Ok(self.flush_live_edits())
    }

    /// Record the document if it drifted from the current snapshot through
    /// live edits. Returns whether anything was recorded.
    fn flush_live_edits(&mut self) -> bool {
        if self.history.current().blocks.as_slice() == self.document.blocks() {
            return false;
        }
        debug!("Recording pending live edits");
        self.history
            .record(HistorySnapshot::new(self.document.blocks().to_vec()).with_description("Edit block"));
        true
    }

    /// Global styles sit outside history: undo never reverts them
    pub fn set_global_styles(&mut self, global_styles: GlobalStyles) {
        if self.document.global_styles == global_styles {
            return;
        }
        self.document = self.document.with_global_styles(global_styles);
        self.revision += 1;
    }

    // ---- Generated content ----

    pub fn apply_generated_content(&mut self, block_id: &str, props: Props) -> Result<bool, CommandError> {
        self.execute(EditCommand::UpdateProps {
            block_id: block_id.to_string(),
            props,
        })
    }

    /// Ask `generator` for content for an existing block and apply it
    pub fn generate_content(
        &mut self,
        generator: &dyn ContentGenerator,
        block_id: &str,
        business_context: &str,
    ) -> Result<bool, EditorError> {
        let block_type = self
            .document
            .block(block_id)
            .map(|block| block.block_type.clone())
            .ok_or_else(|| EditorError::BlockNotFound(block_id.to_string()))?;

        let props = generator.generate(&block_type, business_context)?;
        Ok(self.apply_generated_content(block_id, props)?)
    }

    /// Append a new block filled with generated props, as a single undo step
    pub fn append_generated_block(&mut self, definition_id: &str, props: Props) -> Result<String, CommandError> {
        self.flush_live_edits();
        self.history
            .begin_batch(Some(format!("Generate {}", definition_id)));

        let result = self
            .execute(EditCommand::InsertBlock {
                definition_id: definition_id.to_string(),
                index: None,
            })
            .and_then(|_| {
                let block_id = self.selected.clone().unwrap_or_default();
                self.execute(EditCommand::UpdateProps {
                    block_id: block_id.clone(),
                    props,
                })
                .map(|_| block_id)
            });

        self.history.end_batch();
        result
    }

    // ---- Selection ----

    /// Clicking a block toggles its selection. Ignored in preview mode.
    pub fn click_block(&mut self, block_id: &str) {
        if self.preview_mode || !self.document.contains(block_id) {
            return;
        }
        if self.selected.as_deref() == Some(block_id) {
            self.selected = None;
        } else {
            self.selected = Some(block_id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ---- Drag and drop ----

    pub fn drag_over(&mut self, pointer_y: f64, canvas_top: f64, bounds: &[BlockBounds]) -> Option<usize> {
        if self.preview_mode {
            return None;
        }
        Some(self.drag.drag_over(pointer_y, canvas_top, bounds))
    }

    pub fn drag_over_end_zone(&mut self) -> Option<usize> {
        if self.preview_mode {
            return None;
        }
        Some(self.drag.drag_over_end_zone(self.document.len()))
    }

    pub fn drag_leave(&mut self, still_inside: bool) {
        self.drag.drag_leave(still_inside);
    }

    /// Drop a serialized block definition; selects and returns the new block
    pub fn drop_payload(&mut self, payload: &str) -> Option<String> {
        if self.preview_mode {
            self.drag.clear();
            return None;
        }

        let outcome = self
            .drag
            .drop_payload(payload, &self.document, &self.catalog)?;
        let description = outcome
            .document
            .block(&outcome.block_id)
            .map(|block| format!("Drop {}", block.block_type))
            .unwrap_or_else(|| "Drop block".to_string());

        self.flush_live_edits();
        self.document = outcome.document;
        self.revision += 1;
        self.history
            .record(HistorySnapshot::new(self.document.blocks().to_vec()).with_description(description));
        self.selected = Some(outcome.block_id.clone());
        Some(outcome.block_id)
    }

    // ---- Carousels ----

    pub fn carousel_next(&mut self, block_id: &str) {
        if !self.document.contains(block_id) {
            return;
        }
        let count = self.testimonial_count(block_id);
        self.carousels.entry(block_id.to_string()).or_default().next(count);
    }

    pub fn carousel_previous(&mut self, block_id: &str) {
        if !self.document.contains(block_id) {
            return;
        }
        let count = self.testimonial_count(block_id);
        self.carousels
            .entry(block_id.to_string())
            .or_default()
            .previous(count);
    }

    pub fn carousel(&self, block_id: &str) -> CarouselState {
        self.carousels.get(block_id).copied().unwrap_or_default()
    }

    fn testimonial_count(&self, block_id: &str) -> usize {
        self.document
            .block(block_id)
            .map(|block| PropsReader::new(&block.props).array("testimonials").len())
            .unwrap_or(0)
    }

    // ---- View ----

    /// Entering preview drops the selection and any drag in progress
    pub fn set_preview_mode(&mut self, preview_mode: bool) {
        self.preview_mode = preview_mode;
        if preview_mode {
            self.selected = None;
            self.drag.clear();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn render_context(&self) -> RenderContext {
        let mut ctx = if self.preview_mode {
            RenderContext::preview()
        } else {
            RenderContext::edit()
        };

        ctx.selected = self.selected.clone();
        ctx.carousels = self.carousels.clone();

        if !self.preview_mode {
            ctx.drop_indicator_top = self
                .drag
                .indicator(self.document.len())
                .map(|indicator| indicator.css_top());
        }
        ctx
    }

    // ---- Saving ----

    /// Snapshot the document for persistence
    pub fn prepare_save(&mut self) -> (SaveTicket, SiteData) {
        let ticket = self.save.begin(self.revision);
        (ticket, self.document.to_site_data())
    }

    /// Report a save outcome. Returns false if a newer save superseded it.
    pub fn complete_save<E: fmt::Display>(&mut self, ticket: SaveTicket, result: Result<(), E>) -> bool {
        self.save.finish(ticket, result)
    }

    /// Save synchronously through `store`
    pub fn save_to(&mut self, store: &mut dyn SiteStore, site_id: i64) -> Result<(), EditorError> {
        let (ticket, site_data) = self.prepare_save();
        match store.patch_site_data(site_id, &site_data) {
            Ok(_) => {
                self.complete_save::<String>(ticket, Ok(()));
                Ok(())
            }
            Err(err) => {
                self.complete_save(ticket, Err(&err));
                Err(err.into())
            }
        }
    }

    pub fn save_status(&self) -> &SaveStatus {
        self.save.status()
    }

    /// Whether there are changes newer than the last successful save
    pub fn is_dirty(&self) -> bool {
        self.save.is_dirty(self.revision)
    }
}

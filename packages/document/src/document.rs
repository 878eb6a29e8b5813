//! # Page Document
//!
//! The ordered block sequence of one page plus its global styles.
//!
//! Every editing operation takes `&self` and returns a new document. The
//! input is never modified in place, which is what lets the history keep
//! earlier documents as snapshots without copying on every read.
//!
//! Operations that name a block id which is not in the document are no-ops:
//! the returned document equals the input. A stale id (for example a block
//! deleted a moment earlier) must never take the editing session down.

use crate::{generate_block_id, GlobalStyles, PageBlock, Props};
use pagewright_catalog::BlockDefinition;
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageDocument {
    /// Array position is the authoritative order
    blocks: Vec<PageBlock>,

    pub global_styles: GlobalStyles,

    /// Whether blocks carry a site-builder `order` stamp on the wire
    pub(crate) order_stamped: bool,

    /// Unmodelled top-level site_data fields
    pub(crate) extra: Map<String, Value>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from an existing block list.
    ///
    /// Blocks with a missing or repeated id get a fresh one so the
    /// uniqueness invariant holds from the first edit on.
    pub fn from_blocks(blocks: Vec<PageBlock>, global_styles: GlobalStyles) -> Self {
        let mut seen = HashSet::new();
        let mut fixed = Vec::with_capacity(blocks.len());

        for mut block in blocks {
            if block.id.is_empty() || seen.contains(&block.id) {
                let fresh = loop {
                    let candidate = generate_block_id(&block.block_type);
                    if !seen.contains(&candidate) {
                        break candidate;
                    }
                };
                warn!(old_id = %block.id, new_id = %fresh, "Reassigned duplicate block id");
                block.id = fresh;
            }
            seen.insert(block.id.clone());
            fixed.push(block);
        }

        Self {
            blocks: fixed,
            global_styles,
            order_stamped: false,
            extra: Map::new(),
        }
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    pub fn block(&self, block_id: &str) -> Option<&PageBlock> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn block_at(&self, index: usize) -> Option<&PageBlock> {
        self.blocks.get(index)
    }

    pub fn index_of(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    pub fn contains(&self, block_id: &str) -> bool {
        self.index_of(block_id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Insert a block built from `definition`'s default props.
    ///
    /// `at_index` is clamped to `[0, len]`.
    pub fn insert_block(&self, definition: &BlockDefinition, at_index: usize) -> Self {
        self.insert_block_with_id(definition, at_index).0
    }

    /// Same as [`insert_block`](Self::insert_block), also returning the new id
    pub fn insert_block_with_id(&self, definition: &BlockDefinition, at_index: usize) -> (Self, String) {
        self.insert_new_block(&definition.block_type, definition.default_props.clone(), at_index)
    }

    /// Insert a block of any type with explicit props
    pub fn insert_new_block(&self, block_type: &str, props: Props, at_index: usize) -> (Self, String) {
        let id = self.fresh_id(block_type);
        let index = at_index.min(self.blocks.len());

        let mut next = self.clone();
        next.blocks.insert(index, PageBlock::new(id.clone(), block_type, props));

        debug!(block_id = %id, block_type, index, "Inserted block");
        (next, id)
    }

    /// Shallow-merge `partial` into the block's props
    pub fn update_block_props(&self, block_id: &str, partial: &Props) -> Self {
        let mut next = self.clone();
        match next.blocks.iter_mut().find(|b| b.id == block_id) {
            Some(block) => {
                for (key, value) in partial {
                    block.props.insert(key.clone(), value.clone());
                }
                debug!(block_id, keys = partial.len(), "Updated block props");
            }
            None => debug!(block_id, "Props update for unknown block ignored"),
        }
        next
    }

    pub fn remove_block(&self, block_id: &str) -> Self {
        let mut next = self.clone();
        next.blocks.retain(|b| b.id != block_id);
        if next.blocks.len() != self.blocks.len() {
            debug!(block_id, "Removed block");
        }
        next
    }

    /// Insert a copy with a fresh id right after the original
    pub fn duplicate_block(&self, block_id: &str) -> Self {
        self.duplicate_block_with_id(block_id).0
    }

    pub fn duplicate_block_with_id(&self, block_id: &str) -> (Self, Option<String>) {
        let Some(index) = self.index_of(block_id) else {
            return (self.clone(), None);
        };

        let original = &self.blocks[index];
        let id = self.fresh_id(&original.block_type);
        let mut copy = original.clone();
        copy.id = id.clone();
        copy.order = None;

        let mut next = self.clone();
        next.blocks.insert(index + 1, copy);

        debug!(source = block_id, block_id = %id, "Duplicated block");
        (next, Some(id))
    }

    /// Remove the block at `from` and reinsert it at `to`.
    ///
    /// Equal indices or an out-of-range `from` leave the document unchanged;
    /// `to` is clamped to the end.
    pub fn move_block(&self, from_index: usize, to_index: usize) -> Self {
        if from_index == to_index || from_index >= self.blocks.len() {
            return self.clone();
        }

        let mut next = self.clone();
        let block = next.blocks.remove(from_index);
        let to = to_index.min(next.blocks.len());
        next.blocks.insert(to, block);

        debug!(from = from_index, to, "Moved block");
        next
    }

    pub fn toggle_visibility(&self, block_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(block) = next.blocks.iter_mut().find(|b| b.id == block_id) {
            let visible = !block.is_visible();
            block.set_visible(visible);
            debug!(block_id, visible, "Toggled visibility");
        }
        next
    }

    pub fn toggle_lock(&self, block_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(block) = next.blocks.iter_mut().find(|b| b.id == block_id) {
            let locked = !block.is_locked();
            block.set_locked(locked);
            debug!(block_id, locked, "Toggled lock");
        }
        next
    }

    /// Replace the block sequence, keeping styles and wire settings
    pub fn with_blocks(&self, blocks: Vec<PageBlock>) -> Self {
        let mut next = Self::from_blocks(blocks, self.global_styles.clone());
        next.order_stamped = self.order_stamped;
        next.extra = self.extra.clone();
        next
    }

    pub fn with_global_styles(&self, global_styles: GlobalStyles) -> Self {
        let mut next = self.clone();
        next.global_styles = global_styles;
        next
    }

    pub fn order_stamped(&self) -> bool {
        self.order_stamped
    }

    fn fresh_id(&self, block_type: &str) -> String {
        loop {
            let candidate = generate_block_id(block_type);
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_catalog::BlockCatalog;
    use serde_json::json;

    fn catalog() -> BlockCatalog {
        BlockCatalog::builtin()
    }

    fn three_blocks() -> (PageDocument, Vec<String>) {
        let catalog = catalog();
        let mut doc = PageDocument::new();
        let mut ids = Vec::new();
        for (i, t) in ["hero", "text", "spacer"].iter().enumerate() {
            let def = catalog.definition_for_type(t).unwrap();
            let (next, id) = doc.insert_block_with_id(def, i);
            doc = next;
            ids.push(id);
        }
        (doc, ids)
    }

    #[test]
    fn test_insert_into_empty_document() {
        let catalog = catalog();
        let hero = catalog.definition_for_type("hero").unwrap();

        let empty = PageDocument::new();
        let doc = empty.insert_block(hero, 0);

        assert!(empty.is_empty());
        assert_eq!(doc.len(), 1);
        let block = &doc.blocks()[0];
        assert_eq!(block.block_type, "hero");
        assert_eq!(block.props["title"], hero.default_props["title"]);
        assert!(block.is_visible());
        assert!(!block.is_locked());
        assert!(block.id.starts_with("hero-"));
    }

    #[test]
    fn test_insert_index_is_clamped() {
        let (doc, _) = three_blocks();
        let def = catalog().definition_for_type("video").unwrap().clone();

        let next = doc.insert_block(&def, 99);
        assert_eq!(next.blocks()[3].block_type, "video");
    }

    #[test]
    fn test_repeated_insert_at_top_reverses_order() {
        let catalog = catalog();
        let mut doc = PageDocument::new();
        for t in ["hero", "text", "gallery"] {
            doc = doc.insert_block(catalog.definition_for_type(t).unwrap(), 0);
        }

        let types: Vec<_> = doc.blocks().iter().map(|b| b.block_type.as_str()).collect();
        assert_eq!(types, vec!["gallery", "text", "hero"]);
    }

    #[test]
    fn test_update_props_shallow_merges() {
        let (doc, ids) = three_blocks();
        let mut partial = Props::new();
        partial.insert("title".into(), json!("New title"));

        let next = doc.update_block_props(&ids[0], &partial);
        let block = next.block(&ids[0]).unwrap();
        assert_eq!(block.props["title"], json!("New title"));
        assert_eq!(block.props["buttonText"], json!("Get Started"));

        // Original untouched
        assert_eq!(doc.block(&ids[0]).unwrap().props["title"], json!("Welcome to Our Business"));
    }

    #[test]
    fn test_unknown_id_operations_are_noops() {
        let (doc, _) = three_blocks();
        let partial = Props::new();

        assert_eq!(doc.update_block_props("missing", &partial), doc);
        assert_eq!(doc.remove_block("missing"), doc);
        assert_eq!(doc.duplicate_block("missing"), doc);
        assert_eq!(doc.toggle_lock("missing"), doc);
        assert_eq!(doc.toggle_visibility("missing"), doc);
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let (doc, ids) = three_blocks();

        let (next, new_id) = doc.duplicate_block_with_id(&ids[1]);
        let new_id = new_id.unwrap();

        let order: Vec<_> = next.ids().collect();
        assert_eq!(order, vec![ids[0].as_str(), ids[1].as_str(), new_id.as_str(), ids[2].as_str()]);

        let original = next.block(&ids[1]).unwrap();
        let copy = next.block(&new_id).unwrap();
        assert_ne!(original.id, copy.id);
        assert_eq!(original.block_type, copy.block_type);
        assert_eq!(original.props, copy.props);
    }

    #[test]
    fn test_move_block() {
        let (doc, ids) = three_blocks();

        assert_eq!(doc.move_block(1, 1), doc);
        assert_eq!(doc.move_block(7, 0), doc);

        let next = doc.move_block(0, 2);
        let order: Vec<_> = next.ids().collect();
        assert_eq!(order, vec![ids[1].as_str(), ids[2].as_str(), ids[0].as_str()]);

        let next = doc.move_block(2, 0);
        let order: Vec<_> = next.ids().collect();
        assert_eq!(order, vec![ids[2].as_str(), ids[0].as_str(), ids[1].as_str()]);
    }

    #[test]
    fn test_toggles_flip_flags() {
        let (doc, ids) = three_blocks();

        let hidden = doc.toggle_visibility(&ids[0]);
        assert!(!hidden.block(&ids[0]).unwrap().is_visible());
        assert!(hidden.toggle_visibility(&ids[0]).block(&ids[0]).unwrap().is_visible());

        let locked = doc.toggle_lock(&ids[2]);
        assert!(locked.block(&ids[2]).unwrap().is_locked());
    }

    #[test]
    fn test_from_blocks_reassigns_duplicate_ids() {
        let a = PageBlock::new("same", "hero", Props::new());
        let b = PageBlock::new("same", "text", Props::new());

        let doc = PageDocument::from_blocks(vec![a, b], GlobalStyles::default());
        let ids: HashSet<_> = doc.ids().collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(doc.blocks()[0].id, "same");
    }
}

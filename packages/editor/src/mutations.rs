//! # Edit Commands
//!
//! User-level operations on a page. Each command is applied to an immutable
//! [`PageDocument`] and yields the next one.
//!
//! ## Semantics
//!
//! ### InsertBlock
//! - Builds the block from a catalog definition's default props
//! - Fails if the definition id is not in the catalog
//! - Selects the new block
//!
//! ### UpdateProps
//! - Shallow merge into the block's props
//! - Keys the catalog does not recognize for the block's type are dropped
//!
//! ### RemoveBlock / DuplicateBlock
//! - No-ops on a locked block
//!
//! ### MoveBlock
//! - Equal indices change nothing and record no history
//!
//! Commands that target a missing block are no-ops, never errors.

use pagewright_catalog::BlockCatalog;
use pagewright_document::{PageDocument, Props};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EditCommand {
    /// Insert a block from the catalog; `None` appends
    InsertBlock {
        definition_id: String,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Shallow-merge props into a block
    UpdateProps { block_id: String, props: Props },

    RemoveBlock { block_id: String },

    /// Copy a block with a fresh id right after the original
    DuplicateBlock { block_id: String },

    MoveBlock { from: usize, to: usize },

    ToggleVisibility { block_id: String },

    ToggleLock { block_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unknown block definition: {0}")]
    UnknownDefinition(String),
}

/// Result of applying a command
#[derive(Debug, Clone)]
pub struct Applied {
    pub document: PageDocument,

    /// False when the command was a no-op; nothing should be recorded
    pub changed: bool,

    /// Block that should become selected
    pub select: Option<String>,
}

impl Applied {
    fn unchanged(document: &PageDocument) -> Self {
        Self {
            document: document.clone(),
            changed: false,
            select: None,
        }
    }

    fn changed(document: PageDocument) -> Self {
        Self {
            document,
            changed: true,
            select: None,
        }
    }

    fn selecting(mut self, block_id: String) -> Self {
        self.select = Some(block_id);
        self
    }
}

impl EditCommand {
    pub fn apply(&self, document: &PageDocument, catalog: &BlockCatalog) -> Result<Applied, CommandError> {
        match self {
            EditCommand::InsertBlock { definition_id, index } => {
                let definition = catalog
                    .definition(definition_id)
                    .ok_or_else(|| CommandError::UnknownDefinition(definition_id.clone()))?;
                let at = index.unwrap_or(document.len());
                let (next, block_id) = document.insert_block_with_id(definition, at);
                Ok(Applied::changed(next).selecting(block_id))
            }

            EditCommand::UpdateProps { block_id, props } => {
                Ok(Self::apply_update_props(document, catalog, block_id, props))
            }

            EditCommand::RemoveBlock { block_id } => match document.block(block_id) {
                Some(block) if block.is_locked() => {
                    debug!(block_id = %block_id, "Refusing to remove locked block");
                    Ok(Applied::unchanged(document))
                }
                Some(_) => Ok(Applied::changed(document.remove_block(block_id))),
                None => Ok(Applied::unchanged(document)),
            },

            EditCommand::DuplicateBlock { block_id } => match document.block(block_id) {
                Some(block) if block.is_locked() => {
                    debug!(block_id = %block_id, "Refusing to duplicate locked block");
                    Ok(Applied::unchanged(document))
                }
                Some(_) => match document.duplicate_block_with_id(block_id) {
                    (next, Some(copy_id)) => Ok(Applied::changed(next).selecting(copy_id)),
                    (_, None) => Ok(Applied::unchanged(document)),
                },
                None => Ok(Applied::unchanged(document)),
            },

            EditCommand::MoveBlock { from, to } => {
                if from == to || *from >= document.len() {
                    return Ok(Applied::unchanged(document));
                }
                let next = document.move_block(*from, *to);
                if next.blocks() == document.blocks() {
                    return Ok(Applied::unchanged(document));
                }
                Ok(Applied::changed(next))
            }

            EditCommand::ToggleVisibility { block_id } => {
                if !document.contains(block_id) {
                    return Ok(Applied::unchanged(document));
                }
                Ok(Applied::changed(document.toggle_visibility(block_id)))
            }

            EditCommand::ToggleLock { block_id } => {
                if !document.contains(block_id) {
                    return Ok(Applied::unchanged(document));
                }
                Ok(Applied::changed(document.toggle_lock(block_id)))
            }
        }
    }

    fn apply_update_props(
        document: &PageDocument,
        catalog: &BlockCatalog,
        block_id: &str,
        props: &Props,
    ) -> Applied {
        let Some(block) = document.block(block_id) else {
            return Applied::unchanged(document);
        };

        // Types outside the catalog have no known shape; keep everything
        let known_type = catalog.contains_type(&block.block_type);

        let mut accepted = Props::new();
        for (key, value) in props {
            if known_type && !catalog.recognizes(&block.block_type, key) {
                warn!(block_id, block_type = %block.block_type, key = %key, "Dropping unrecognized prop");
                continue;
            }
            if block.props.get(key) != Some(value) {
                accepted.insert(key.clone(), value.clone());
            }
        }

        if accepted.is_empty() {
            return Applied::unchanged(document);
        }

        Applied::changed(document.update_block_props(block_id, &accepted))
    }

    /// Block the command targets, if any
    pub fn block_id(&self) -> Option<&str> {
        match self {
            EditCommand::UpdateProps { block_id, .. }
            | EditCommand::RemoveBlock { block_id }
            | EditCommand::DuplicateBlock { block_id }
            | EditCommand::ToggleVisibility { block_id }
            | EditCommand::ToggleLock { block_id } => Some(block_id),
            EditCommand::InsertBlock { .. } | EditCommand::MoveBlock { .. } => None,
        }
    }

    /// Short label for the history entry
    pub fn describe(&self) -> String {
        match self {
            EditCommand::InsertBlock { definition_id, .. } => format!("Insert {}", definition_id),
            EditCommand::UpdateProps { .. } => "Edit block".to_string(),
            EditCommand::RemoveBlock { .. } => "Delete block".to_string(),
            EditCommand::DuplicateBlock { .. } => "Duplicate block".to_string(),
            EditCommand::MoveBlock { .. } => "Move block".to_string(),
            EditCommand::ToggleVisibility { .. } => "Toggle visibility".to_string(),
            EditCommand::ToggleLock { .. } => "Toggle lock".to_string(),
        }
    }
}

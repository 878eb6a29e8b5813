//! # Drag Insertion
//!
//! Computes where a block dragged from the library would land and turns the
//! drop payload into an insertion.
//!
//! Positions are vertical pixel offsets. The canvas measures each rendered
//! block (`data-block-index` wrappers) and passes the bounds in; nothing here
//! touches a real layout engine.

use pagewright_catalog::{BlockCatalog, BlockDefinition};
use pagewright_document::PageDocument;
use tracing::{debug, warn};

/// Vertical extent of one rendered block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockBounds {
    pub top: f64,
    pub height: f64,
}

impl BlockBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the first block whose vertical midpoint is below `pointer_y`,
/// or `bounds.len()` when the pointer is below every midpoint.
///
/// `bounds` must be in document order.
pub fn insertion_index(pointer_y: f64, bounds: &[BlockBounds]) -> usize {
    bounds
        .iter()
        .position(|b| pointer_y < b.midpoint())
        .unwrap_or(bounds.len())
}

/// Where the insertion line is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropIndicator {
    /// Before the first block
    Top,

    /// After the last block
    Bottom,

    /// Between blocks, as a percentage of the canvas height
    Fraction(f64),
}

impl DropIndicator {
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 {
            DropIndicator::Top
        } else if index >= len {
            DropIndicator::Bottom
        } else {
            DropIndicator::Fraction(index as f64 / len as f64 * 100.0)
        }
    }

    /// Value for the indicator's CSS `top`
    pub fn css_top(&self) -> String {
        match self {
            DropIndicator::Top => "16px".to_string(),
            DropIndicator::Bottom => "100%".to_string(),
            DropIndicator::Fraction(pct) => format!("{}%", pct),
        }
    }
}

/// Result of a successful drop
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    pub document: PageDocument,
    pub block_id: String,
    pub index: usize,
}

/// Pointer tracking for a drag in progress
#[derive(Debug, Clone, Default)]
pub struct DragState {
    over_index: Option<usize>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved over the canvas.
    ///
    /// `pointer_y` and every bound's `top` are viewport coordinates; both are
    /// made relative to `canvas_top` before comparing.
    pub fn drag_over(&mut self, pointer_y: f64, canvas_top: f64, bounds: &[BlockBounds]) -> usize {
        let relative: Vec<BlockBounds> = bounds
            .iter()
            .map(|b| BlockBounds::new(b.top - canvas_top, b.height))
            .collect();
        let index = insertion_index(pointer_y - canvas_top, &relative);

        self.over_index = Some(index);
        index
    }

    /// Pointer is over the trailing drop zone
    pub fn drag_over_end_zone(&mut self, len: usize) -> usize {
        self.over_index = Some(len);
        len
    }

    /// Pointer left an element. Child-to-child moves report `still_inside`
    /// and keep the current index.
    pub fn drag_leave(&mut self, still_inside: bool) {
        if !still_inside {
            self.over_index = None;
        }
    }

    pub fn over_index(&self) -> Option<usize> {
        self.over_index
    }

    pub fn is_active(&self) -> bool {
        self.over_index.is_some()
    }

    pub fn indicator(&self, len: usize) -> Option<DropIndicator> {
        self.over_index
            .map(|index| DropIndicator::for_index(index, len))
    }

    pub fn clear(&mut self) {
        self.over_index = None;
    }

    /// Insert the dropped definition at the tracked index.
    ///
    /// `payload` is a serialized [`BlockDefinition`]. Only its `id` and `type`
    /// are read; props always come from the catalog's own definition. A
    /// malformed payload or one naming
    /// a type the catalog lacks is logged and ignored. The tracked index is
    /// cleared either way; with no tracked index the block is appended.
    pub fn drop_payload(
        &mut self,
        payload: &str,
        document: &PageDocument,
        catalog: &BlockCatalog,
    ) -> Option<DropOutcome> {
        let index = self.over_index.take().unwrap_or(document.len());

        let definition: BlockDefinition = match serde_json::from_str(payload) {
            Ok(definition) => definition,
            Err(err) => {
                warn!(error = %err, "Ignoring malformed drop payload");
                return None;
            }
        };

        if definition.block_type.is_empty() {
            warn!(definition_id = %definition.id, "Ignoring drop payload without a block type");
            return None;
        }

        let Some(definition) = catalog
            .definition(&definition.id)
            .filter(|known| known.block_type == definition.block_type)
            .or_else(|| catalog.definition_for_type(&definition.block_type))
        else {
            warn!(
                definition_id = %definition.id,
                block_type = %definition.block_type,
                "Ignoring drop payload for a block type outside the catalog"
            );
            return None;
        };

        let index = index.min(document.len());
        let (document, block_id) = document.insert_block_with_id(definition, index);
        debug!(block_id = %block_id, index, "Dropped block");

        Some(DropOutcome {
            document,
            block_id,
            index,
        })
    }
}

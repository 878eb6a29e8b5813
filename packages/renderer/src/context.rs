use crate::CarouselState;
use std::collections::HashMap;

/// Per-render inputs that are not part of the document
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Id of the selected block, if any
    pub selected: Option<String>,

    /// Preview shows the page as visitors see it: no chrome, hidden blocks omitted
    pub preview_mode: bool,

    /// Carousel cursors keyed by block id
    pub carousels: HashMap<String, CarouselState>,

    /// CSS `top` of the drop indicator while a drag is over the canvas
    pub drop_indicator_top: Option<String>,
}

impl RenderContext {
    pub fn edit() -> Self {
        Self::default()
    }

    pub fn preview() -> Self {
        Self {
            preview_mode: true,
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, block_id: impl Into<String>) -> Self {
        self.selected = Some(block_id.into());
        self
    }

    pub fn with_carousel(mut self, block_id: impl Into<String>, state: CarouselState) -> Self {
        self.carousels.insert(block_id.into(), state);
        self
    }

    pub fn with_drop_indicator(mut self, top: impl Into<String>) -> Self {
        self.drop_indicator_top = Some(top.into());
        self
    }

    pub fn is_selected(&self, block_id: &str) -> bool {
        self.selected.as_deref() == Some(block_id)
    }

    pub fn carousel(&self, block_id: &str) -> CarouselState {
        self.carousels.get(block_id).copied().unwrap_or_default()
    }
}

use pagewright_catalog::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property bag of one block. Its shape is determined by the block type.
pub type Props = Map<String, Value>;

/// One content block placed on a page.
///
/// Optional flags stay absent on the wire until the editor touches them, so
/// a block that was loaded and never edited serializes back to the same JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBlock {
    pub id: String,

    #[serde(rename = "type")]
    pub block_type: String,

    #[serde(default)]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) is_visible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) is_locked: Option<bool>,

    /// Site-builder position stamp, re-derived from array position on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// Site-builder section styling (padding, backgroundColor, borderRadius, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,

    /// Fields this version does not model, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageBlock {
    pub fn new(id: impl Into<String>, block_type: impl Into<String>, props: Props) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            props,
            is_visible: Some(true),
            is_locked: Some(false),
            order: None,
            style: None,
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::parse(&self.block_type)
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible.unwrap_or(true)
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked.unwrap_or(false)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.is_visible = Some(visible);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.is_locked = Some(locked);
    }

    pub fn with_style(mut self, style: Value) -> Self {
        if let Value::Object(map) = style {
            self.style = Some(map);
        }
        self
    }

    /// Read a string from the `style` sub-object
    pub fn style_str(&self, key: &str) -> Option<&str> {
        self.style
            .as_ref()
            .and_then(|style| style.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Move a legacy `content` object into `props`.
    ///
    /// Returns true when the block was rewritten.
    pub(crate) fn migrate_legacy_content(&mut self) -> bool {
        if !self.props.is_empty() {
            return false;
        }
        match self.extra.remove("content") {
            Some(Value::Object(content)) => {
                self.props = content;
                true
            }
            Some(other) => {
                self.extra.insert("content".to_string(), other);
                false
            }
            None => false,
        }
    }
}

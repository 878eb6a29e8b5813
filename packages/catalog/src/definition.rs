use crate::BlockKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A block type as offered in the block library.
///
/// The serialized form of a definition is also the payload carried by a
/// drag operation from the library onto the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDefinition {
    pub id: String,

    /// Discriminator copied onto every block created from this definition
    #[serde(rename = "type")]
    pub block_type: String,

    pub category: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Props a freshly inserted block starts with (never empty)
    pub default_props: Map<String, Value>,

    /// Keys the renderer understands that have no default value
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_props: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    #[serde(default)]
    pub is_popular: bool,

    #[serde(default)]
    pub is_premium: bool,
}

impl BlockDefinition {
    pub fn new(
        id: impl Into<String>,
        kind: BlockKind,
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        default_props: Value,
    ) -> Self {
        let default_props = match default_props {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            id: id.into(),
            block_type: kind.as_str().to_string(),
            category: category.into(),
            name: name.into(),
            description: description.into(),
            default_props,
            optional_props: Vec::new(),
            preview: None,
            is_popular: false,
            is_premium: false,
        }
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    pub fn with_optional_props(mut self, keys: &[&str]) -> Self {
        self.optional_props = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::parse(&self.block_type)
    }

    pub fn recognizes(&self, key: &str) -> bool {
        self.default_props.contains_key(key) || self.optional_props.iter().any(|k| k == key)
    }

    pub fn recognized_keys(&self) -> impl Iterator<Item = &str> {
        self.default_props
            .keys()
            .map(String::as_str)
            .chain(self.optional_props.iter().map(String::as_str))
    }

    /// Case-insensitive substring match over name and description
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_ignores_library_only_fields() {
        // Library cards carry presentation fields the payload parser must skip
        let payload = r#"{
            "id": "hero-section",
            "type": "hero",
            "category": "content",
            "name": "Hero Section",
            "description": "Eye-catching header",
            "icon": {},
            "defaultProps": { "title": "Welcome" },
            "isPopular": true
        }"#;

        let def: BlockDefinition = serde_json::from_str(payload).unwrap();
        assert_eq!(def.block_type, "hero");
        assert_eq!(def.kind(), Some(BlockKind::Hero));
        assert!(def.is_popular);
        assert!(!def.is_premium);
        assert_eq!(def.default_props["title"], json!("Welcome"));
    }

    #[test]
    fn test_recognizes_default_and_optional_keys() {
        let def = BlockDefinition::new(
            "hero-section",
            BlockKind::Hero,
            "content",
            "Hero",
            "",
            json!({ "title": "x" }),
        )
        .with_optional_props(&["buttonLink"]);

        assert!(def.recognizes("title"));
        assert!(def.recognizes("buttonLink"));
        assert!(!def.recognizes("price"));
        assert_eq!(def.recognized_keys().count(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let def = BlockDefinition::new(
            "video-embed",
            BlockKind::Video,
            "media",
            "Video Player",
            "Embed videos from YouTube",
            json!({ "videoUrl": "" }),
        );

        assert!(def.matches_search("youtube"));
        assert!(def.matches_search("PLAYER"));
        assert!(!def.matches_search("gallery"));
    }
}

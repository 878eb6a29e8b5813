use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page-wide design settings inlined into published output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    /// Hex color used for buttons and accents
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    /// Hex color used for hover states
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// CSS length for the content container's max width
    #[serde(default = "default_container_width")]
    pub container_width: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_primary_color() -> String {
    "#3b82f6".to_string()
}

fn default_secondary_color() -> String {
    "#10b981".to_string()
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_container_width() -> String {
    "1200px".to_string()
}

impl Default for GlobalStyles {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
            container_width: default_container_width(),
            extra: Map::new(),
        }
    }
}

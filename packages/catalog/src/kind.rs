use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every block type the editor knows how to render.
///
/// Documents store the type as a plain string so that a document written by a
/// newer editor still loads; `BlockKind::parse` returns `None` for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Text,
    Features,
    Gallery,
    Video,
    Columns,
    Spacer,
    Testimonials,
    Team,
    Hours,
    Map,
    Form,
    Newsletter,
    Products,
    Services,
    Contact,
    Cta,
    Image,
}

impl BlockKind {
    pub const ALL: [BlockKind; 18] = [
        BlockKind::Hero,
        BlockKind::Text,
        BlockKind::Features,
        BlockKind::Gallery,
        BlockKind::Video,
        BlockKind::Columns,
        BlockKind::Spacer,
        BlockKind::Testimonials,
        BlockKind::Team,
        BlockKind::Hours,
        BlockKind::Map,
        BlockKind::Form,
        BlockKind::Newsletter,
        BlockKind::Products,
        BlockKind::Services,
        BlockKind::Contact,
        BlockKind::Cta,
        BlockKind::Image,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Text => "text",
            BlockKind::Features => "features",
            BlockKind::Gallery => "gallery",
            BlockKind::Video => "video",
            BlockKind::Columns => "columns",
            BlockKind::Spacer => "spacer",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Team => "team",
            BlockKind::Hours => "hours",
            BlockKind::Map => "map",
            BlockKind::Form => "form",
            BlockKind::Newsletter => "newsletter",
            BlockKind::Products => "products",
            BlockKind::Services => "services",
            BlockKind::Contact => "contact",
            BlockKind::Cta => "cta",
            BlockKind::Image => "image",
        }
    }

    /// Section-style blocks share one title/subtitle/text/button layout.
    pub fn is_generic_section(&self) -> bool {
        matches!(
            self,
            BlockKind::Services | BlockKind::Contact | BlockKind::Cta
        )
    }

    /// Prop keys holding pre-formatted markup that must never be escaped.
    pub fn rich_text_keys(&self) -> &'static [&'static str] {
        match self {
            BlockKind::Text => &["content"],
            BlockKind::Columns => &["leftContent", "rightContent"],
            _ => &[],
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown block type: {}", s))
    }
}

//! # Site Data
//!
//! The persisted `site_data` blob: the only storage contract of the editor.
//!
//! ```json
//! {
//!   "blocks": [{ "id": "...", "type": "hero", "props": {}, "isVisible": true, "order": 0 }],
//!   "globalStyles": { "primaryColor": "#3b82f6", "secondaryColor": "#10b981",
//!                     "fontFamily": "Inter", "containerWidth": "1200px" }
//! }
//! ```
//!
//! Two block shapes exist in the wild. Block-library documents keep content
//! in `props` and order by array position. Site-builder documents keep it in
//! `content` and stamp an explicit `order`. Loading migrates the second shape
//! once: `content` becomes `props` and blocks are sorted by `order`. Saving
//! re-stamps `order` from array position if the document came in stamped.

use crate::{DocumentError, GlobalStyles, PageBlock, PageDocument};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    #[serde(default)]
    pub blocks: Vec<PageBlock>,

    #[serde(default)]
    pub global_styles: GlobalStyles,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteData {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        if !value.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Load into the editing model, migrating legacy shapes
    pub fn into_document(self) -> PageDocument {
        let mut blocks = self.blocks;

        let mut migrated = 0;
        for block in &mut blocks {
            if block.migrate_legacy_content() {
                migrated += 1;
            }
        }

        let order_stamped = blocks.iter().any(|b| b.order.is_some());
        if order_stamped {
            // Stable: unstamped blocks keep their relative array position
            let mut keyed: Vec<(i64, usize, PageBlock)> = blocks
                .into_iter()
                .enumerate()
                .map(|(i, b)| (b.order.unwrap_or(i as i64), i, b))
                .collect();
            keyed.sort_by_key(|(order, position, _)| (*order, *position));
            blocks = keyed.into_iter().map(|(_, _, b)| b).collect();
        }

        debug!(
            blocks = blocks.len(),
            migrated,
            order_stamped,
            "Loaded site data"
        );

        let mut document = PageDocument::from_blocks(blocks, self.global_styles);
        document.order_stamped = order_stamped;
        document.extra = self.extra;
        document
    }

    /// Wire shape of a document, with `order` derived from position
    pub fn from_document(document: &PageDocument) -> Self {
        let blocks = document
            .blocks()
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let mut block = block.clone();
                block.order = if document.order_stamped {
                    Some(index as i64)
                } else {
                    None
                };
                block
            })
            .collect();

        Self {
            blocks,
            global_styles: document.global_styles.clone(),
            extra: document.extra.clone(),
        }
    }
}

impl From<&PageDocument> for SiteData {
    fn from(document: &PageDocument) -> Self {
        SiteData::from_document(document)
    }
}

impl PageDocument {
    /// Parse a `site_data` JSON blob straight into a document
    pub fn from_site_json(json: &str) -> Result<Self, DocumentError> {
        Ok(SiteData::from_json(json)?.into_document())
    }

    pub fn to_site_data(&self) -> SiteData {
        SiteData::from_document(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Props;
    use serde_json::json;

    #[test]
    fn test_round_trip_preserves_untouched_blocks() {
        let input = json!({
            "blocks": [
                { "id": "hero-1", "type": "hero", "props": { "title": "Hello", "overlayOpacity": 0.4 } },
                { "id": "text-1", "type": "text", "props": { "content": "<p>x</p>" }, "isVisible": false, "isLocked": true },
                { "id": "future-1", "type": "carousel3d", "props": { "slides": [1, 2, 3] }, "motion": "slow" }
            ],
            "globalStyles": {
                "primaryColor": "#111111",
                "secondaryColor": "#222222",
                "fontFamily": "Roboto",
                "containerWidth": "1000px"
            },
            "seo": { "title": "My Site" }
        });

        let doc = SiteData::from_value(input.clone()).unwrap().into_document();

        // Edit one block only
        let mut partial = Props::new();
        partial.insert("title".into(), json!("Changed"));
        let edited = doc.update_block_props("hero-1", &partial);

        let out = edited.to_site_data().to_value().unwrap();
        assert_eq!(out["blocks"][1], input["blocks"][1]);
        assert_eq!(out["blocks"][2], input["blocks"][2]);
        assert_eq!(out["globalStyles"], input["globalStyles"]);
        assert_eq!(out["seo"], input["seo"]);
        assert_eq!(out["blocks"][0]["props"]["title"], json!("Changed"));

        // No edits at all reproduces the input value
        assert_eq!(doc.to_site_data().to_value().unwrap(), input);
    }

    #[test]
    fn test_legacy_blocks_are_sorted_and_restamped() {
        let json = r##"{
            "blocks": [
                { "id": "contact-1", "type": "contact", "content": { "title": "Get In Touch" }, "style": {}, "order": 2 },
                { "id": "hero-1", "type": "hero", "content": { "title": "Welcome" }, "style": { "padding": "80px 20px" }, "order": 0 },
                { "id": "services-1", "type": "services", "content": { "title": "Our Services" }, "style": {}, "order": 1 }
            ],
            "globalStyles": { "primaryColor": "#3b82f6", "secondaryColor": "#10b981", "fontFamily": "Inter", "containerWidth": "1200px" }
        }"##;

        let doc = PageDocument::from_site_json(json).unwrap();
        let ids: Vec<_> = doc.ids().collect();
        assert_eq!(ids, vec!["hero-1", "services-1", "contact-1"]);
        assert!(doc.order_stamped());
        assert_eq!(doc.blocks()[0].props["title"], json!("Welcome"));

        let moved = doc.move_block(2, 0);
        let out = moved.to_site_data();
        let stamped: Vec<_> = out.blocks.iter().map(|b| (b.id.as_str(), b.order)).collect();
        assert_eq!(
            stamped,
            vec![("contact-1", Some(0)), ("hero-1", Some(1)), ("services-1", Some(2))]
        );
    }

    #[test]
    fn test_unstamped_documents_stay_unstamped() {
        let doc = PageDocument::from_site_json(r#"{ "blocks": [ { "id": "a", "type": "hero", "props": { "title": "x" } } ] }"#)
            .unwrap();
        assert!(!doc.order_stamped());
        assert!(doc.to_site_data().blocks.iter().all(|b| b.order.is_none()));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(SiteData::from_json("[1, 2]"), Err(DocumentError::NotAnObject)));
        assert!(matches!(SiteData::from_json("{ nope"), Err(DocumentError::Json(_))));
    }
}

//! Starter documents for new sites.
//!
//! Seeded documents use the site-builder shape (`style` sub-objects and an
//! `order` stamp) so they round-trip through the same save path as sites
//! created by the hosted builder.

use crate::{GlobalStyles, PageBlock, PageDocument, Props};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// The template fields seeding reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSeed {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl TemplateSeed {
    pub fn new(name: impl Into<String>, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Build the first document of a new site.
///
/// Without a template this is a single welcome hero. With one, a hero titled
/// after the template category, a services section for `business`
/// templates and a contact section.
pub fn starter_document(template: Option<&TemplateSeed>) -> PageDocument {
    let blocks = match template {
        None => vec![seeded(
            "hero-1",
            "hero",
            json!({
                "title": "Welcome to Your New Website",
                "subtitle": "Start building something amazing",
                "buttonText": "Get Started",
                "buttonLink": "#"
            }),
            json!({ "padding": "80px 20px", "backgroundColor": "#f8fafc" }),
        )],
        Some(seed) => template_blocks(seed),
    };

    debug!(
        template = template.map(|t| t.name.as_str()),
        blocks = blocks.len(),
        "Seeded starter document"
    );

    let mut blocks = blocks;
    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = Some(index as i64);
    }

    let mut document = PageDocument::from_blocks(blocks, GlobalStyles::default());
    document.order_stamped = true;
    document
}

fn template_blocks(seed: &TemplateSeed) -> Vec<PageBlock> {
    let mut blocks = vec![seeded(
        "hero-1",
        "hero",
        json!({
            "title": format!("Professional {} Solutions", capitalize(&seed.category)),
            "subtitle": seed.description,
            "buttonText": "Get Started",
            "buttonLink": "#contact"
        }),
        json!({ "padding": "80px 20px", "backgroundColor": "#f8fafc" }),
    )];

    if seed.category == "business" {
        blocks.push(seeded(
            "services-1",
            "services",
            json!({
                "title": "Our Services",
                "subtitle": "What we offer to help your business grow"
            }),
            json!({ "padding": "60px 20px", "backgroundColor": "#ffffff" }),
        ));
    }

    blocks.push(seeded(
        "contact-1",
        "contact",
        json!({
            "title": "Get In Touch",
            "subtitle": "Ready to get started? Contact us today",
            "text": "We'd love to hear from you. Send us a message and we'll respond as soon as possible."
        }),
        json!({ "padding": "60px 20px", "backgroundColor": "#f8fafc" }),
    ));

    blocks
}

fn seeded(id: &str, block_type: &str, props: Value, style: Value) -> PageBlock {
    let props = match props {
        Value::Object(map) => map,
        _ => Props::new(),
    };
    PageBlock::new(id, block_type, props).with_style(style)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_single_hero() {
        let doc = starter_document(None);

        assert_eq!(doc.len(), 1);
        let hero = &doc.blocks()[0];
        assert_eq!(hero.id, "hero-1");
        assert_eq!(hero.props["title"], json!("Welcome to Your New Website"));
        assert_eq!(hero.style_str("backgroundColor"), Some("#f8fafc"));
        assert!(doc.order_stamped());
    }

    #[test]
    fn test_business_template_adds_services() {
        let seed = TemplateSeed::new("Consulting", "business", "Advice that pays off");
        let doc = starter_document(Some(&seed));

        let ids: Vec<_> = doc.ids().collect();
        assert_eq!(ids, vec!["hero-1", "services-1", "contact-1"]);
        assert_eq!(doc.blocks()[0].props["title"], json!("Professional Business Solutions"));
        assert_eq!(doc.blocks()[0].props["subtitle"], json!("Advice that pays off"));
    }

    #[test]
    fn test_other_templates_skip_services() {
        let seed = TemplateSeed::new("Folio", "portfolio", "");
        let doc = starter_document(Some(&seed));

        let ids: Vec<_> = doc.ids().collect();
        assert_eq!(ids, vec!["hero-1", "contact-1"]);

        let saved = doc.to_site_data();
        assert_eq!(saved.blocks[1].order, Some(1));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("restaurant"), "Restaurant");
        assert_eq!(capitalize(""), "");
    }
}

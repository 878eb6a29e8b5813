//! Render functions, one per block kind.
//!
//! Every function reads props through [`PropsReader`], so a missing key, a
//! wrong JSON type or an empty string all fall back to the same default.

mod business;
mod commerce;
mod content;
mod forms;
mod layout;
mod media;

use crate::{RenderContext, VNode};
use pagewright_catalog::BlockKind;
use pagewright_document::{PageBlock, PropsReader};
use serde_json::Value;

pub(crate) type RenderFn = fn(&PageBlock, &RenderContext) -> VNode;

pub(crate) fn render_fn(kind: BlockKind) -> RenderFn {
    match kind {
        BlockKind::Hero => content::hero,
        BlockKind::Text => content::text,
        BlockKind::Features => content::features,
        BlockKind::Services | BlockKind::Contact | BlockKind::Cta => content::section,
        BlockKind::Gallery => media::gallery,
        BlockKind::Video => media::video,
        BlockKind::Image => media::image,
        BlockKind::Columns => layout::columns,
        BlockKind::Spacer => layout::spacer,
        BlockKind::Testimonials => business::testimonials,
        BlockKind::Team => business::team,
        BlockKind::Hours => business::hours,
        BlockKind::Map => business::map,
        BlockKind::Form => forms::form,
        BlockKind::Newsletter => forms::newsletter,
        BlockKind::Products => commerce::products,
    }
}

pub(crate) fn unknown(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    root(block, "div").with_child(
        VNode::element("p")
            .with_class("block-unknown-message")
            .with_child(VNode::text(format!("Unknown block type: {}", block.block_type))),
    )
}

/// Root element of a block: `class="block block-{type}"`
fn root(block: &PageBlock, tag: &str) -> VNode {
    VNode::element(tag)
        .with_class("block")
        .with_class(format!("block-{}", block.block_type))
        .with_attr("data-block-type", block.block_type.as_str())
}

/// Grid container with a clamped column count
fn grid(columns: u8) -> VNode {
    VNode::element("div")
        .with_class("grid")
        .with_class(format!("grid-cols-{}", columns))
        .with_style("grid-template-columns", format!("repeat({}, minmax(0, 1fr))", columns))
}

/// Optional `h2` title and `h3` subtitle shared by titled sections
fn headings(props: &PropsReader<'_>) -> Vec<VNode> {
    let mut nodes = Vec::new();
    if let Some(title) = props.str("title") {
        nodes.push(VNode::text_element("h2", title));
    }
    if let Some(subtitle) = props.str("subtitle") {
        nodes.push(VNode::text_element("h3", subtitle));
    }
    nodes
}

fn link_button(text: &str, href: &str) -> VNode {
    VNode::element("a")
        .with_class("btn")
        .with_attr("href", href)
        .with_child(VNode::text(text))
}

/// String field of an array item, empty when absent
fn field<'a>(item: &'a Value, key: &str) -> &'a str {
    item.get(key).and_then(Value::as_str).unwrap_or("")
}

fn optional_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// CSS length from a number (pixels) or a string (as is)
fn css_length(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(px) => format!("{}px", px),
            None => default.to_string(),
        },
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

/// Five stars, `rating` of them filled
fn rating_stars(rating: f64) -> VNode {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    VNode::element("div")
        .with_class("rating")
        .with_attr("aria-label", format!("Rated {} out of 5", filled))
        .with_children((0..5).map(|i| {
            if i < filled {
                VNode::element("span").with_class("star").with_class("filled").with_child(VNode::text("★"))
            } else {
                VNode::element("span").with_class("star").with_child(VNode::text("☆"))
            }
        }))
}

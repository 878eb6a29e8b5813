use super::{grid, headings, link_button, optional_field, root, field};
use crate::{RenderContext, VNode};
use pagewright_document::{PageBlock, PropsReader};

const HERO_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
const TEXT_PLACEHOLDER: &str = "<p>Add your content here...</p>";

pub(super) fn hero(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);

    let background = match props.str("backgroundImage") {
        Some(url) => format!("url({})", url),
        None => HERO_GRADIENT.to_string(),
    };
    let align = props.str("textAlign").or(props.str("alignment")).unwrap_or("center");

    let mut content = VNode::element("div")
        .with_class("hero-content")
        .with_style("text-align", align)
        .with_child(VNode::text_element("h1", props.str_or("title", "Welcome to Our Business")))
        .with_child(
            VNode::element("p")
                .with_class("hero-subtitle")
                .with_child(VNode::text(props.str_or(
                    "subtitle",
                    "We provide exceptional services for your needs",
                ))),
        )
        .with_child(link_button(
            props.str_or("buttonText", "Get Started"),
            props.str_or("buttonLink", "#"),
        ));

    if let Some(color) = props.str("textColor") {
        content = content.with_style("color", color);
    }

    root(block, "section")
        .with_style("background-image", background)
        .with_child(
            VNode::element("div")
                .with_class("hero-overlay")
                .with_style("opacity", props.f64_or("overlayOpacity", 0.5).to_string()),
        )
        .with_child(content)
}

/// Rich text. Blocks saved by the site builder carry `title` and `text`
/// instead of `content`; both shapes render.
pub(super) fn text(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let align = props.str("alignment").or(props.str("textAlign")).unwrap_or("left");

    let mut body = headings(&props);
    match (props.str("content"), props.str("text")) {
        (Some(content), _) => body.push(VNode::raw(content)),
        (None, None) if body.is_empty() => body.push(VNode::raw(TEXT_PLACEHOLDER)),
        _ => {}
    }
    if let Some(text) = props.str("text") {
        body.push(VNode::text_element("p", text));
    }
    if let Some(button) = props.str("buttonText") {
        body.push(link_button(button, props.str_or("buttonLink", "#")));
    }

    root(block, "div")
        .with_class("prose")
        .with_style("text-align", align)
        .with_style("max-width", props.str_or("maxWidth", "100%"))
        .with_children(body)
}

pub(super) fn features(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let show_icons = props.bool_or("showIcons", false);

    let cards = props.array("features").iter().map(|feature| {
        let icon = show_icons.then(|| {
            VNode::element("span")
                .with_class("feature-icon")
                .with_attr("data-icon", optional_field(feature, "icon").unwrap_or("star"))
        });

        VNode::element("div")
            .with_class("feature-card")
            .with_optional_child(icon)
            .with_child(VNode::text_element("h3", field(feature, "title")))
            .with_child(VNode::text_element("p", field(feature, "description")))
    });

    root(block, "div")
        .with_children(headings(&props))
        .with_child(grid(props.column_count("columns", 3)).with_children(cards))
}

/// Services, contact and call-to-action sections share one layout
pub(super) fn section(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let align = props.str_or("alignment", "left");

    let mut body = VNode::element("div")
        .with_class(format!("text-{}", align))
        .with_children(headings(&props));

    if let Some(text) = props.str("text") {
        body = body.with_child(VNode::text_element("p", text));
    }
    if let Some(button) = props.str("buttonText") {
        body = body.with_child(link_button(button, props.str_or("buttonLink", "#")));
    }

    let mut section = root(block, "section").with_class("section");
    if let Some(color) = props.str("backgroundColor") {
        section = section.with_style("background-color", color);
    }
    if let Some(color) = props.str("textColor") {
        section = section.with_style("color", color);
    }

    section.with_child(VNode::element("div").with_class("container").with_child(body))
}

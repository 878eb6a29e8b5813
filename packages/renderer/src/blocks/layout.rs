use super::{css_length, grid, root};
use crate::{RenderContext, VNode};
use pagewright_document::{PageBlock, PropsReader};

const LEFT_PLACEHOLDER: &str = "<h3>Left Column</h3><p>Content for the left side.</p>";
const RIGHT_PLACEHOLDER: &str = "<h3>Right Column</h3><p>Content for the right side.</p>";

pub(super) fn columns(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);

    let gap = match props.str("gap") {
        Some("small") => "1rem",
        Some("large") => "3rem",
        _ => "2rem",
    };
    let align = match props.str("verticalAlign") {
        Some("center") => "center",
        Some("bottom") => "end",
        _ => "start",
    };

    let column = |markup: &str| VNode::element("div").with_class("prose").with_child(VNode::raw(markup));

    root(block, "div").with_child(
        grid(props.column_count("columns", 2))
            .with_style("gap", gap)
            .with_style("align-items", align)
            .with_child(column(props.str_or("leftContent", LEFT_PLACEHOLDER)))
            .with_child(column(props.str_or("rightContent", RIGHT_PLACEHOLDER))),
    )
}

pub(super) fn spacer(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);

    let height = match props.str("height") {
        Some("small") => "2rem".to_string(),
        Some("medium") => "4rem".to_string(),
        Some("large") => "8rem".to_string(),
        _ => css_length(props.get("height"), "4rem"),
    };

    root(block, "div")
        .with_style("height", height)
        .with_style("background-color", props.str_or("backgroundColor", "transparent"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_document::Props;
    use serde_json::{json, Value};

    fn block(block_type: &str, props: Value) -> PageBlock {
        let props: Props = serde_json::from_value(props).unwrap();
        PageBlock::new("l-1", block_type, props)
    }

    #[test]
    fn test_columns_default_and_raw_content() {
        let node = columns(
            &block("columns", json!({ "columns": "x", "leftContent": "<em>L</em>" })),
            &RenderContext::edit(),
        );

        assert!(node.find_by_class("grid-cols-2").is_some());
        let html = node.to_html();
        assert!(html.contains("<em>L</em>"));
        assert!(html.contains(RIGHT_PLACEHOLDER));
    }

    #[test]
    fn test_spacer_heights() {
        let ctx = RenderContext::edit();
        assert_eq!(spacer(&block("spacer", json!({ "height": "large" })), &ctx).style("height"), Some("8rem"));
        assert_eq!(spacer(&block("spacer", json!({})), &ctx).style("height"), Some("4rem"));
        assert_eq!(spacer(&block("spacer", json!({ "height": 24 })), &ctx).style("height"), Some("24px"));
        assert_eq!(spacer(&block("spacer", json!({ "height": "5vh" })), &ctx).style("height"), Some("5vh"));
    }
}

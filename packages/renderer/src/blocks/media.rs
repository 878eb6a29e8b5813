use super::{field, grid, headings, optional_field, root};
use crate::{embed_url, RenderContext, VNode};
use pagewright_document::{PageBlock, PropsReader};

pub(super) fn gallery(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let show_captions = props.bool_or("showCaptions", false);

    let items = props.array("images").iter().enumerate().map(|(index, image)| {
        let alt = optional_field(image, "alt")
            .map(str::to_string)
            .unwrap_or_else(|| format!("Gallery image {}", index + 1));

        let caption = optional_field(image, "caption")
            .filter(|_| show_captions)
            .map(|caption| VNode::text_element("figcaption", caption));

        VNode::element("figure")
            .with_class("gallery-item")
            .with_child(
                VNode::element("img")
                    .with_attr("src", field(image, "src"))
                    .with_attr("alt", alt),
            )
            .with_optional_child(caption)
    });

    root(block, "div")
        .with_children(headings(&props))
        .with_child(grid(props.column_count("columns", 3)).with_children(items))
}

pub(super) fn video(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    // Stored as "16:9", CSS wants "16/9"
    let aspect_ratio = props.str_or("aspectRatio", "16/9").replace(':', "/");

    let inner = match props.str("videoUrl") {
        Some(url) => VNode::element("iframe")
            .with_attr("src", embed_url(url))
            .with_attr("title", "Embedded video")
            .with_attr("allowfullscreen", ""),
        None => VNode::element("div")
            .with_class("video-placeholder")
            .with_child(VNode::text_element("p", "Add a video URL to display content")),
    };

    root(block, "div").with_child(
        VNode::element("div")
            .with_class("video-frame")
            .with_style("aspect-ratio", aspect_ratio)
            .with_child(inner),
    )
}

pub(super) fn image(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);

    let figure = match props.str("imageUrl") {
        Some(url) => VNode::element("figure")
            .with_child(
                VNode::element("img")
                    .with_attr("src", url)
                    .with_attr("alt", props.str_or("imageAlt", "")),
            )
            .with_optional_child(props.str("title").map(|t| VNode::text_element("figcaption", t))),
        None => VNode::element("div")
            .with_class("image-placeholder")
            .with_child(VNode::text_element("p", "Add an image URL to display content")),
    };

    root(block, "div").with_child(figure)
}

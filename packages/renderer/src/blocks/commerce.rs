use super::{field, grid, headings, optional_field, root};
use crate::{RenderContext, VNode};
use pagewright_document::{PageBlock, PropsReader};

pub(super) fn products(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let show_prices = props.bool_or("showPrices", false);
    let show_descriptions = props.bool_or("showDescriptions", false);

    let cards = props.array("products").iter().map(|product| {
        let price = optional_field(product, "price")
            .filter(|_| show_prices)
            .map(|price| VNode::element("p").with_class("price").with_child(VNode::text(price)));
        let description = optional_field(product, "description")
            .filter(|_| show_descriptions)
            .map(|text| VNode::element("p").with_class("description").with_child(VNode::text(text)));

        VNode::element("div")
            .with_class("product")
            .with_child(
                VNode::element("img")
                    .with_attr("src", field(product, "image"))
                    .with_attr("alt", field(product, "name")),
            )
            .with_child(VNode::text_element("h3", field(product, "name")))
            .with_optional_child(price)
            .with_optional_child(description)
            .with_child(
                VNode::element("button")
                    .with_class("btn")
                    .with_attr("type", "button")
                    .with_child(VNode::text("Add to Cart")),
            )
    });

    root(block, "div")
        .with_children(headings(&props))
        .with_child(grid(props.column_count("columns", 3)).with_children(cards))
}

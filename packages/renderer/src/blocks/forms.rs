use super::{field, optional_field, root};
use crate::{RenderContext, VNode};
use pagewright_document::{PageBlock, PropsReader};
use serde_json::Value;

pub(super) fn form(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);

    let fields = props.array("fields").iter().map(form_field);

    root(block, "div")
        .with_child(VNode::text_element("h3", props.str_or("title", "Contact Us")))
        .with_child(
            VNode::element("form")
                .with_class("contact-form")
                .with_children(fields)
                .with_child(
                    VNode::element("button")
                        .with_attr("type", "submit")
                        .with_class("btn")
                        .with_child(VNode::text(props.str_or("submitText", "Send Message"))),
                ),
        )
}

fn form_field(field_def: &Value) -> VNode {
    let label_text = field(field_def, "label");
    let name = optional_field(field_def, "name").unwrap_or(label_text);
    let placeholder = optional_field(field_def, "placeholder").unwrap_or(label_text);
    let required = field_def.get("required").and_then(Value::as_bool).unwrap_or(false);

    let mut label = VNode::element("label")
        .with_attr("for", name)
        .with_child(VNode::text(label_text));
    if required {
        label = label.with_child(
            VNode::element("span")
                .with_class("required")
                .with_child(VNode::text("*")),
        );
    }

    let mut input = match optional_field(field_def, "type").unwrap_or("text") {
        "textarea" => {
            let rows = field_def.get("rows").and_then(Value::as_u64).unwrap_or(3);
            VNode::element("textarea").with_attr("rows", rows.to_string())
        }
        kind => VNode::element("input").with_attr("type", kind),
    }
    .with_attr("id", name)
    .with_attr("name", name)
    .with_attr("placeholder", placeholder);
    if required {
        input = input.with_attr("required", "");
    }

    VNode::element("div")
        .with_class("form-field")
        .with_child(label)
        .with_child(input)
}

pub(super) fn newsletter(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let layout = match props.str("layout") {
        Some("inline") => "inline",
        _ => "stacked",
    };

    root(block, "div")
        .with_child(VNode::text_element("h3", props.str_or("title", "Stay Updated")))
        .with_optional_child(props.str("description").map(|d| VNode::text_element("p", d)))
        .with_child(
            VNode::element("div")
                .with_class("newsletter-form")
                .with_class(layout)
                .with_child(
                    VNode::element("input")
                        .with_attr("type", "email")
                        .with_attr("placeholder", props.str_or("placeholder", "Enter your email address")),
                )
                .with_child(
                    VNode::element("button")
                        .with_class("btn")
                        .with_attr("type", "button")
                        .with_child(VNode::text(props.str_or("buttonText", "Subscribe"))),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_document::Props;
    use serde_json::json;

    fn block(block_type: &str, props: Value) -> PageBlock {
        let props: Props = serde_json::from_value(props).unwrap();
        PageBlock::new("f-1", block_type, props)
    }

    #[test]
    fn test_form_fields() {
        let props = json!({
            "fields": [
                { "type": "email", "name": "email", "label": "Email", "required": true },
                { "type": "textarea", "name": "message", "label": "Message", "rows": 4 }
            ]
        });
        let node = form(&block("form", props), &RenderContext::edit());
        let html = node.to_html();

        assert!(html.contains("<input id=\"email\" name=\"email\" placeholder=\"Email\" required type=\"email\" />"));
        assert!(html.contains("<textarea id=\"message\" name=\"message\" placeholder=\"Message\" rows=\"4\"></textarea>"));
        assert_eq!(node.find_all_by_class("required").len(), 1);
        assert!(node.text_content().ends_with("Send Message"));
    }

    #[test]
    fn test_newsletter_defaults() {
        let node = newsletter(&block("newsletter", json!({})), &RenderContext::edit());

        assert!(node.find_by_class("stacked").is_some());
        assert_eq!(node.text_content(), "Stay Updated Subscribe");
        assert!(node.to_html().contains("placeholder=\"Enter your email address\""));
    }
}

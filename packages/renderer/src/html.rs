//! Markup helpers shared by the preview renderer and the publish serializer.

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Attribute values use the same escaping as text
pub fn escape_attr(value: &str) -> String {
    escape_html(value)
}

pub fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// `backgroundColor` -> `background-color`
pub fn css_property(key: &str) -> String {
    let mut property = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            property.push('-');
            property.push(c.to_ascii_lowercase());
        } else {
            property.push(c);
        }
    }
    property
}

/// Text of an HTML fragment: tags become spaces, basic entities are
/// decoded and whitespace is collapsed. Contents of `<style>` and
/// `<script>` are dropped.
pub fn text_of_markup(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        text.push(' ');
        let after = &rest[open..];

        let Some(close) = after.find('>') else {
            // Unterminated tag, keep it as text
            text.push_str(after);
            rest = "";
            break;
        };

        let name = after[1..close]
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        rest = &after[close + 1..];

        if name == "style" || name == "script" {
            let end = format!("</{}", name);
            rest = match rest.to_ascii_lowercase().find(&end) {
                Some(at) => &rest[at..],
                None => "",
            };
        }
    }
    text.push_str(rest);

    decode_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

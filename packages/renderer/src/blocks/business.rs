use super::{css_length, field, grid, headings, optional_field, rating_stars, root};
use crate::{RenderContext, VNode};
use pagewright_document::{PageBlock, PropsReader};
use serde_json::Value;

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Clone, Copy)]
struct TestimonialOptions {
    show_avatars: bool,
    show_ratings: bool,
}

pub(super) fn testimonials(block: &PageBlock, ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let items = props.array("testimonials");
    let options = TestimonialOptions {
        show_avatars: props.bool_or("showAvatars", false),
        show_ratings: props.bool_or("showRatings", false),
    };

    let body = if props.str("layout") == Some("carousel") {
        carousel(block, ctx, items, options)
    } else {
        grid(2).with_children(items.iter().map(|item| testimonial_card(item, options)))
    };

    root(block, "div").with_children(headings(&props)).with_child(body)
}

fn carousel(block: &PageBlock, ctx: &RenderContext, items: &[Value], options: TestimonialOptions) -> VNode {
    let count = items.len();
    let state = ctx.carousel(&block.id);

    let mut node = VNode::element("div")
        .with_class("carousel")
        .with_attr("data-index", state.current(count).to_string());

    if let Some(item) = items.get(state.current(count)) {
        node = node.with_child(testimonial_card(item, options));
    }

    if count > 1 {
        let nav_button = |class: &str, label: &str, symbol: &str, enabled: bool| {
            let button = VNode::element("button")
                .with_class(class)
                .with_attr("type", "button")
                .with_attr("aria-label", label)
                .with_child(VNode::text(symbol));
            if enabled {
                button
            } else {
                button.with_attr("disabled", "")
            }
        };

        node = node.with_child(
            VNode::element("div")
                .with_class("carousel-nav")
                .with_child(nav_button(
                    "carousel-prev",
                    "Previous testimonial",
                    "‹",
                    state.can_go_previous(count),
                ))
                .with_child(nav_button(
                    "carousel-next",
                    "Next testimonial",
                    "›",
                    state.can_go_next(count),
                )),
        );
    }

    node
}

fn testimonial_card(item: &Value, options: TestimonialOptions) -> VNode {
    let avatar = optional_field(item, "avatar")
        .filter(|_| options.show_avatars)
        .map(|src| {
            VNode::element("img")
                .with_class("avatar")
                .with_attr("src", src)
                .with_attr("alt", field(item, "name"))
        });

    let rating = item
        .get("rating")
        .and_then(Value::as_f64)
        .filter(|r| options.show_ratings && *r > 0.0)
        .map(rating_stars);

    VNode::element("div")
        .with_class("testimonial")
        .with_optional_child(avatar)
        .with_child(VNode::text_element(
            "blockquote",
            format!("\u{201c}{}\u{201d}", field(item, "content")),
        ))
        .with_child(
            VNode::element("div")
                .with_class("testimonial-author")
                .with_child(VNode::text_element("p", field(item, "name")))
                .with_child(
                    VNode::element("p")
                        .with_class("company")
                        .with_child(VNode::text(field(item, "company"))),
                )
                .with_optional_child(rating),
        )
}

pub(super) fn team(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let show_bios = props.bool_or("showBios", false);
    let show_social = props.bool_or("showSocial", false);

    let cards = props.array("members").iter().map(|member| {
        let bio = optional_field(member, "bio")
            .filter(|_| show_bios)
            .map(|bio| VNode::element("p").with_class("bio").with_child(VNode::text(bio)));

        let social = member
            .get("social")
            .and_then(Value::as_object)
            .filter(|links| show_social && !links.is_empty())
            .map(|links| {
                VNode::element("div")
                    .with_class("social-links")
                    .with_children(links.iter().map(|(platform, url)| {
                        VNode::element("a")
                            .with_class("social-link")
                            .with_attr("href", url.as_str().unwrap_or("#"))
                            .with_child(VNode::text(platform.as_str()))
                    }))
            });

        VNode::element("div")
            .with_class("team-member")
            .with_child(
                VNode::element("img")
                    .with_class("photo")
                    .with_attr("src", field(member, "photo"))
                    .with_attr("alt", field(member, "name")),
            )
            .with_child(VNode::text_element("h3", field(member, "name")))
            .with_child(
                VNode::element("p")
                    .with_class("role")
                    .with_child(VNode::text(field(member, "role"))),
            )
            .with_optional_child(bio)
            .with_optional_child(social)
    });

    root(block, "div")
        .with_children(headings(&props))
        .with_child(grid(props.column_count("columns", 3)).with_children(cards))
}

pub(super) fn hours(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);
    let schedule = props.object("hours");

    let rows = WEEKDAYS.iter().map(|day| {
        let time = schedule
            .and_then(|hours| hours.get(*day))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or("Closed");

        VNode::element("div")
            .with_class("hours-row")
            .with_child(
                VNode::element("span")
                    .with_class("day")
                    .with_child(VNode::text(capitalize(day))),
            )
            .with_child(
                VNode::element("span")
                    .with_class("time")
                    .with_child(VNode::text(time)),
            )
    });

    let timezone = props.str("timezone").map(|tz| {
        VNode::element("p")
            .with_class("timezone")
            .with_child(VNode::text(format!("All times in {}", tz)))
    });

    root(block, "div")
        .with_child(VNode::text_element("h3", props.str_or("title", "Business Hours")))
        .with_child(VNode::element("div").with_class("hours-list").with_children(rows))
        .with_optional_child(timezone)
}

pub(super) fn map(block: &PageBlock, _ctx: &RenderContext) -> VNode {
    let props = PropsReader::new(&block.props);

    let mut placeholder = VNode::element("div")
        .with_class("map-placeholder")
        .with_style("height", css_length(props.get("height"), "400px"))
        .with_child(VNode::element("p").with_class("map-label").with_child(VNode::text("Interactive Map")))
        .with_child(VNode::text_element("p", props.str_or("address", "")));

    if let (Some(lat), Some(lng)) = (props.f64("latitude"), props.f64("longitude")) {
        placeholder = placeholder
            .with_attr("data-lat", lat.to_string())
            .with_attr("data-lng", lng.to_string())
            .with_attr("data-zoom", props.f64_or("zoom", 15.0).to_string());
    }

    root(block, "div").with_child(placeholder)
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
    use crate::CarouselState;
    use pagewright_document::Props;
    use serde_json::json;

    fn block(block_type: &str, props: Value) -> PageBlock {
        let props: Props = serde_json::from_value(props).unwrap();
        PageBlock::new("t-1", block_type, props)
    }

    fn three_testimonials() -> PageBlock {
        block(
            "testimonials",
            json!({
                "layout": "carousel",
                "showRatings": true,
                "testimonials": [
                    { "name": "A", "content": "First", "rating": 5 },
                    { "name": "B", "content": "Second", "rating": 4 },
                    { "name": "C", "content": "Third", "rating": 3 }
                ]
            }),
        )
    }

    #[test]
    fn test_carousel_shows_current_item() {
        let block = three_testimonials();
        let ctx = RenderContext::edit().with_carousel("t-1", CarouselState::at(1));

        let node = testimonials(&block, &ctx);
        let quote = node.find_by_class("testimonial").unwrap();
        assert!(quote.text_content().contains("Second"));
        assert_eq!(node.find_all_by_class("filled").len(), 4);
    }

    #[test]
    fn test_carousel_buttons_disable_at_bounds() {
        let block = three_testimonials();

        let first = testimonials(&block, &RenderContext::edit());
        assert_eq!(first.find_by_class("carousel-prev").unwrap().attr("disabled"), Some(""));
        assert_eq!(first.find_by_class("carousel-next").unwrap().attr("disabled"), None);

        // Out-of-range cursor clamps to the last item
        let ctx = RenderContext::edit().with_carousel("t-1", CarouselState::at(9));
        let last = testimonials(&block, &ctx);
        assert_eq!(last.find_by_class("carousel").unwrap().attr("data-index"), Some("2"));
        assert_eq!(last.find_by_class("carousel-next").unwrap().attr("disabled"), Some(""));
    }

    #[test]
    fn test_single_testimonial_has_no_nav() {
        let node = testimonials(
            &block("testimonials", json!({ "layout": "carousel", "testimonials": [ { "name": "A" } ] })),
            &RenderContext::edit(),
        );
        assert!(node.find_by_class("carousel-nav").is_none());
    }

    #[test]
    fn test_grid_layout_lists_all() {
        let node = testimonials(
            &block("testimonials", json!({ "layout": "grid", "testimonials": [ {}, {} ] })),
            &RenderContext::edit(),
        );
        assert_eq!(node.find_all_by_class("testimonial").len(), 2);
    }

    #[test]
    fn test_hours_fill_missing_days() {
        let node = hours(
            &block("hours", json!({ "hours": { "monday": "9-5" }, "timezone": "EST" })),
            &RenderContext::edit(),
        );

        let text = node.text_content();
        assert!(text.starts_with("Business Hours Monday 9-5 Tuesday Closed"));
        assert!(text.ends_with("Sunday Closed All times in EST"));
    }

    #[test]
    fn test_team_hides_bios_and_social_when_off() {
        let props = json!({
            "members": [ { "name": "Emily", "bio": "Ten years", "social": { "linkedin": "#" } } ],
            "showBios": false,
            "showSocial": false
        });
        let node = team(&block("team", props), &RenderContext::edit());

        assert!(node.find_by_class("bio").is_none());
        assert!(node.find_by_class("social-links").is_none());
    }

    #[test]
    fn test_map_height() {
        let node = map(&block("map", json!({ "height": 250, "address": "1 Main St" })), &RenderContext::edit());
        let placeholder = node.find_by_class("map-placeholder").unwrap();
        assert_eq!(placeholder.style("height"), Some("250px"));
        assert_eq!(node.text_content(), "Interactive Map 1 Main St");
    }
}

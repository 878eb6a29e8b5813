use pagewright_catalog::BlockKind;
use pagewright_document::{GlobalStyles, PageBlock, PageDocument, PropsReader};
use pagewright_renderer::html::{css_property, escape_attr, escape_html};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Global style {key} has a value that cannot be inlined into CSS: {value}")]
    UnsafeStyleValue { key: String, value: String },
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Document `<title>`
    pub title: String,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Emit a comment in place of each block type that cannot be published
    pub comments: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "Website".to_string(),
            pretty: true,
            indent: "  ".to_string(),
            comments: false,
        }
    }
}

impl CompileOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

// Preview defaults, repeated here so published output matches the canvas
const HERO_TITLE: &str = "Welcome to Our Business";
const HERO_SUBTITLE: &str = "We provide exceptional services for your needs";
const HERO_BUTTON: &str = "Get Started";
const TEXT_PLACEHOLDER: &str = "<p>Add your content here...</p>";

/// Block types the serializer knows how to publish
pub fn is_publishable(block_type: &str) -> bool {
    matches!(
        BlockKind::parse(block_type),
        Some(BlockKind::Hero | BlockKind::Text | BlockKind::Services | BlockKind::Contact | BlockKind::Cta)
    )
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a page to a standalone HTML document
pub fn compile_to_html(document: &PageDocument, options: &CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options.clone());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(&document.global_styles, &mut ctx)?;

    ctx.add_line("<body>");
    ctx.indent();

    let mut published = 0;
    for block in document.blocks() {
        if !block.is_visible() {
            debug!(block_id = %block.id, "Skipping hidden block");
            continue;
        }
        if compile_block(block, &mut ctx) {
            published += 1;
        }
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    info!(blocks = published, total = document.len(), "Compiled page");
    Ok(ctx.get_output())
}

fn compile_head(styles: &GlobalStyles, ctx: &mut Context) -> Result<(), CompileError> {
    let font_family = css_value("fontFamily", &styles.font_family)?;
    let container_width = css_value("containerWidth", &styles.container_width)?;
    let primary_color = css_value("primaryColor", &styles.primary_color)?;
    let secondary_color = css_value("secondaryColor", &styles.secondary_color)?;

    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    ctx.add_line("<style>");
    ctx.indent();
    let rules = [
        "* { margin: 0; padding: 0; box-sizing: border-box; }".to_string(),
        format!(
            "body {{ font-family: {}, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; }}",
            font_family
        ),
        format!(
            ".container {{ max-width: {}; margin: 0 auto; padding: 0 20px; }}",
            container_width
        ),
        ".hero { display: flex; align-items: center; justify-content: center; min-height: 80vh; text-align: center; }".to_string(),
        ".hero h1 { font-size: 3rem; margin-bottom: 1rem; }".to_string(),
        ".hero p { font-size: 1.25rem; margin-bottom: 2rem; opacity: 0.9; }".to_string(),
        format!(
            ".btn {{ display: inline-block; padding: 12px 24px; background: {}; color: white; text-decoration: none; border-radius: 6px; transition: background 0.3s; }}",
            primary_color
        ),
        format!(".btn:hover {{ background: {}; }}", secondary_color),
        ".section { padding: 60px 0; }".to_string(),
        ".text-center { text-align: center; }".to_string(),
        ".text-left { text-align: left; }".to_string(),
        ".text-right { text-align: right; }".to_string(),
        "h2 { font-size: 2.5rem; margin-bottom: 1rem; }".to_string(),
        "h3 { font-size: 1.5rem; margin-bottom: 1rem; }".to_string(),
        "p { margin-bottom: 1rem; }".to_string(),
    ];
    for rule in &rules {
        ctx.add_line(rule);
    }
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
    Ok(())
}

/// Global style values are inlined into a `<style>` element as-is
fn css_value<'a>(key: &str, value: &'a str) -> Result<&'a str, CompileError> {
    if value.contains(['<', '>', '{', '}', ';']) {
        return Err(CompileError::UnsafeStyleValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Returns false when the block type has no published form
fn compile_block(block: &PageBlock, ctx: &mut Context) -> bool {
    match block.kind() {
        Some(BlockKind::Hero) => compile_hero(block, ctx),
        Some(BlockKind::Text) => compile_section(block, true, ctx),
        Some(BlockKind::Services | BlockKind::Contact | BlockKind::Cta) => compile_section(block, false, ctx),
        _ => {
            debug!(block_id = %block.id, block_type = %block.block_type, "Block type is not published");
            if ctx.options.comments {
                let comment = format!(
                    "<!-- Unpublished block: {} ({}) -->",
                    block.block_type.replace("--", "- -"),
                    block.id.replace("--", "- -")
                );
                ctx.add_line(&comment);
            }
            return false;
        }
    }
    true
}

fn compile_hero(block: &PageBlock, ctx: &mut Context) {
    let props = PropsReader::new(&block.props);

    let open = format!("<section class=\"hero\" style=\"{}\">", container_style(block));
    ctx.add_line(&open);
    ctx.indent();
    ctx.add_line("<div class=\"container\">");
    ctx.indent();

    text_line(ctx, "h1", props.str_or("title", HERO_TITLE));
    text_line(ctx, "p", props.str_or("subtitle", HERO_SUBTITLE));
    button_line(
        ctx,
        props.str_or("buttonText", HERO_BUTTON),
        props.str_or("buttonLink", "#"),
    );

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</section>");
}

/// Generic titled section. Text blocks additionally carry rich `content`,
/// published without escaping like the preview does.
fn compile_section(block: &PageBlock, rich_text: bool, ctx: &mut Context) {
    let props = PropsReader::new(&block.props);
    let align = if rich_text {
        props.str("alignment").or(props.str("textAlign")).unwrap_or("left")
    } else {
        props.str_or("alignment", "left")
    };

    let open = format!("<section class=\"section\" style=\"{}\">", container_style(block));
    ctx.add_line(&open);
    ctx.indent();
    ctx.add_line("<div class=\"container\">");
    ctx.indent();
    let body = format!("<div class=\"text-{}\">", escape_attr(align));
    ctx.add_line(&body);
    ctx.indent();

    let title = props.str("title");
    let subtitle = props.str("subtitle");
    if let Some(title) = title {
        text_line(ctx, "h2", title);
    }
    if let Some(subtitle) = subtitle {
        text_line(ctx, "h3", subtitle);
    }

    if rich_text {
        match (props.str("content"), props.str("text")) {
            (Some(content), _) => ctx.add_line(content),
            (None, None) if title.is_none() && subtitle.is_none() => ctx.add_line(TEXT_PLACEHOLDER),
            _ => {}
        }
    }

    if let Some(text) = props.str("text") {
        text_line(ctx, "p", text);
    }
    if let Some(button) = props.str("buttonText") {
        button_line(ctx, button, props.str_or("buttonLink", "#"));
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</section>");
}

fn text_line(ctx: &mut Context, tag: &str, text: &str) {
    let line = format!("<{tag}>{}</{tag}>", escape_html(text));
    ctx.add_line(&line);
}

fn button_line(ctx: &mut Context, text: &str, href: &str) {
    let line = format!(
        "<a href=\"{}\" class=\"btn\">{}</a>",
        escape_attr(href),
        escape_html(text)
    );
    ctx.add_line(&line);
}

/// Inline style of a published section: the block's `style` sub-object over
/// fixed defaults, plus the `textColor` prop
fn container_style(block: &PageBlock) -> String {
    const DEFAULTS: [(&str, &str); 4] = [
        ("padding", "40px 0"),
        ("backgroundColor", "transparent"),
        ("borderRadius", "0"),
        ("boxShadow", "none"),
    ];

    let props = PropsReader::new(&block.props);
    let mut declarations: Vec<(String, String)> = DEFAULTS
        .iter()
        .map(|(key, default)| {
            let value = block
                .style_str(key)
                .or_else(|| if *key == "backgroundColor" { props.str(key) } else { None })
                .unwrap_or(*default);
            (css_property(key), value.to_string())
        })
        .collect();

    declarations.push((
        "color".to_string(),
        props.str_or("textColor", "inherit").to_string(),
    ));

    if let Some(style) = &block.style {
        for (key, value) in style {
            if DEFAULTS.iter().any(|(known, _)| *known == key.as_str()) {
                continue;
            }
            let value = match value {
                serde_json::Value::String(s) if !s.is_empty() => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => continue,
            };
            declarations.push((css_property(key), value));
        }
    }

    let style = declarations
        .iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join(" ");
    escape_attr(&style)
}

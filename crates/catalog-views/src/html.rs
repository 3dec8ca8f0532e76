//! Page shell and HTML helpers shared by both screens.

use catalog_core::SiteConfig;

/// Escape text for use in element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    pub title: Option<String>,
    pub meta: Vec<(String, String)>,
    /// Stylesheet links and inline style blocks, already rendered.
    pub links: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_html(href)
        ));
        self
    }

    /// Add inline CSS. The text is trusted.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Document frame around the screen content.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    /// HTML between `</head>` and the first section.
    pub body_start: String,
    /// HTML after the last section.
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Insert `html` right before the closing tags.
    pub fn with_trailer(mut self, html: &str) -> Self {
        self.body_end = format!("{}\n{}", html, self.body_end);
        self
    }

    /// Everything up to the first section.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Everything after the last section.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

/// Shell used by both screens: site header linking back to the catalog.
pub fn page_shell(config: &SiteConfig, title: &str) -> Shell {
    let mut head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(CATALOG_STYLES);

    if let Some(css) = &config.css_path {
        head = head.with_stylesheet(css);
    }

    let home = config.catalog_route().link(&[]);

    Shell::new(head).with_body_start(format!(
        r#"<body>
<header class="site-header">
    <a href="{home}" class="logo">{name}</a>
</header>
<main class="page">
"#,
        home = escape_html(&home),
        name = escape_html(&config.name),
    ))
}

pub const CATALOG_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --success: #22c55e;
    --error: #ef4444;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
}

.logo { font-weight: 700; color: var(--primary); text-decoration: none; }

.page { max-width: 1200px; margin: 0 auto; padding: 2rem; }

.catalog-controls { display: flex; gap: 2rem; margin-bottom: 1.5rem; }
.catalog-controls label { margin-right: 0.5rem; }

.loading { color: var(--text-muted); }

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 1rem;
}

.product-card img { width: 100%; aspect-ratio: 1; object-fit: contain; }
.product-card h2 { font-size: 1.1rem; margin: 0.5rem 0; }
.product-card .description { color: var(--text-muted); font-size: 0.9rem; }
.product-card .price { font-weight: 700; }
.product-card a { color: var(--primary); }

.product-detail { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }

.gallery-main img { width: 100%; border-radius: 8px; background: var(--card-bg); }
.gallery-thumbs { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.gallery-thumbs img { width: 64px; height: 64px; object-fit: cover; border: 1px solid var(--border); }

.price-row .price { font-size: 1.5rem; font-weight: 700; margin-right: 0.5rem; }
.price-row .discount { color: var(--text-muted); }

.availability { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 999px; color: #fff; }
.availability--in-stock { background: var(--success); }
.availability--unavailable { background: var(--error); }

.spec-list { list-style: none; padding: 0; }
.spec-list li { padding: 0.25rem 0; border-bottom: 1px solid var(--border); }

.qr-code img { width: 120px; height: 120px; }

.review { border-top: 1px solid var(--border); padding: 1rem 0; }
.review-date { color: var(--text-muted); font-size: 0.85rem; }
"##;

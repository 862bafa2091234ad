//! Document wrapper: embeds a rendered body in a self-contained HTML page.
//!
//! The page has a fixed skeleton:
//!
//! ```text
//! <head>  charset, viewport, <title>, one <style> block (default CSS + custom CSS)
//! <body>
//!   div.container
//!     div.header   div.title, div.timestamp
//!     div.content  rendered body, inserted verbatim
//!     div.footer   attribution line
//! ```
//!
//! The title and timestamp are supplied by the caller; nothing here reads the
//! clock, so the output is a pure function of its inputs.

use crate::render::escape::escape_text;

const DEFAULT_CSS: &str = include_str!("../css/viewer.css");

/// Suffix appended to the `<title>` element.
pub const DEFAULT_TITLE_SUFFIX: &str = " - MD Viewer";

/// Attribution line shown in the footer.
pub const DEFAULT_FOOTER: &str = "Generated by MD Viewer | Terminal-Work";

/// Caller-owned facts about the document being wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    /// Already formatted generation time, shown as-is.
    pub generated_at: String,
}

impl DocumentMetadata {
    pub fn new(title: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: generated_at.into(),
        }
    }
}

/// Options for the HTML page around the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub title_suffix: String,
    pub footer: String,
    /// Optional custom CSS appended after the default stylesheet
    pub custom_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            custom_css: None,
        }
    }
}

impl HtmlOptions {
    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = suffix.into();
        self
    }
}

/// The stylesheet embedded in every wrapped document.
pub fn default_css() -> &'static str {
    DEFAULT_CSS
}

/// Wrap a rendered body using the default options.
pub fn wrap(meta: &DocumentMetadata, body: &str) -> String {
    wrap_with_options(meta, body, &HtmlOptions::default())
}

/// Wrap a rendered body in the full HTML page.
pub fn wrap_with_options(meta: &DocumentMetadata, body: &str, options: &HtmlOptions) -> String {
    let title = escape_text(&meta.title);
    let page_title = escape_text(&format!("{}{}", meta.title, options.title_suffix));
    let timestamp = escape_text(&meta.generated_at);
    let footer = escape_text(&options.footer);
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="mdview">
    <title>{page_title}</title>
    <style>
{DEFAULT_CSS}
{custom_css}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div class="title">{title}</div>
            <div class="timestamp">{timestamp}</div>
        </div>
        <div class="content">
{body}
        </div>
        <div class="footer">
            {footer}
        </div>
    </div>
</body>
</html>"#
    )
}

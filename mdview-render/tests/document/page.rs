//! Page structure tests (rendered body → full HTML page)

use mdview_render::format::Format;
use mdview_render::formats::HtmlFormat;
use mdview_render::{
    default_css, wrap, wrap_with_options, DocumentMetadata, FormatRegistry, HtmlOptions, Renderer,
};
use once_cell::sync::Lazy;
use regex::Regex;

fn meta() -> DocumentMetadata {
    DocumentMetadata::new("Release Notes", "2024-01-02 03:04:05")
}

fn without_styles(html: &str) -> String {
    static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex for stripping style blocks")
    });
    STYLE_REGEX
        .replace_all(html, "<style></style>")
        .into_owned()
}

#[test]
fn page_contains_header_content_and_footer_in_order() {
    let body = Renderer::new().render("# Intro\n\n- item");
    let html = without_styles(&wrap(&meta(), &body));

    let header = html.find("<div class=\"header\">").expect("header block");
    let title = html.find("<div class=\"title\">Release Notes</div>").expect("title");
    let stamp = html
        .find("<div class=\"timestamp\">2024-01-02 03:04:05</div>")
        .expect("timestamp");
    let content = html.find("<div class=\"content\">").expect("content block");
    let heading = html.find("<h1>Intro</h1>").expect("rendered body");
    let footer = html.find("<div class=\"footer\">").expect("footer block");

    assert!(header < title && title < stamp && stamp < content);
    assert!(content < heading && heading < footer);
    assert!(html.contains("Generated by MD Viewer | Terminal-Work"));
}

#[test]
fn head_declares_charset_viewport_and_styles() {
    let html = wrap(&meta(), "");
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("name=\"viewport\""));
    assert!(html.contains(default_css()));
}

#[test]
fn body_is_inserted_verbatim() {
    let body = "<pre class=\"code-block\"><code class=\"language-c\">\nint a = b < c;";
    let html = wrap(&meta(), body);
    assert!(html.contains(body));
}

#[test]
fn custom_css_and_footer_are_applied() {
    let options = HtmlOptions::default()
        .with_custom_css("body { background: black; }".to_string())
        .with_footer("Internal build");
    let html = wrap_with_options(&meta(), "", &options);
    assert!(html.contains("body { background: black; }"));
    assert!(html.contains("Internal build"));
}

#[test]
fn html_format_matches_direct_wrap() {
    let rendered = Renderer::new().render_lines("**hi**");
    let via_format = HtmlFormat::default().serialize(&rendered, &meta());
    assert_eq!(via_format, wrap(&meta(), &rendered.body()));
}

#[test]
fn registry_selects_fragment_and_page() {
    let registry = FormatRegistry::default();
    let rendered = Renderer::new().render_lines("text");

    let fragment = registry
        .serialize(&rendered, &meta(), "fragment")
        .expect("fragment format");
    assert_eq!(fragment, "text");

    let page = registry
        .serialize(&rendered, &meta(), "html")
        .expect("html format");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(registry.serialize(&rendered, &meta(), "pdf").is_err());
}

//! Full HTML page output.

use crate::document::{wrap_with_options, DocumentMetadata, HtmlOptions};
use crate::format::Format;
use crate::render::Rendered;

/// Wraps the rendered body in the self-contained page.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Self-contained HTML5 page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, rendered: &Rendered, meta: &DocumentMetadata) -> String {
        wrap_with_options(meta, &rendered.body(), &self.options)
    }
}

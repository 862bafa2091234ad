//! Bare body output, for embedding in another page.

use crate::document::DocumentMetadata;
use crate::format::Format;
use crate::render::Rendered;

/// Emits the rendered body without any surrounding page.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentFormat;

impl Format for FragmentFormat {
    fn name(&self) -> &str {
        "fragment"
    }

    fn description(&self) -> &str {
        "Rendered body only, no document skeleton"
    }

    fn serialize(&self, rendered: &Rendered, _meta: &DocumentMetadata) -> String {
        rendered.body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;

    #[test]
    fn emits_body_only() {
        let rendered = Renderer::new().render_lines("**x**");
        let out = FragmentFormat.serialize(&rendered, &DocumentMetadata::new("t", "n"));
        assert_eq!(out, "<strong>x</strong>");
    }
}

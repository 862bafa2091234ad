//! Line renderer (markdown dialect → HTML body)
//!
//! The renderer walks the input one line at a time. The only state carried
//! between lines is whether the scan is inside a fenced code region, and that
//! state lives in a local [`ScanState`] owned by a single call: concurrent
//! renders never share it.
//!
//! Per line, in order:
//!
//! 1. A fence line (trimmed, starts with three backticks) opens or closes a
//!    verbatim region and emits the matching tag.
//! 2. Inside a verbatim region the line is emitted untouched.
//! 3. `&`, `<` and `>` are escaped.
//! 4. The escaped line is classified into a [`Block`] (header, rule, checkbox,
//!    bullet, blockquote, blank or plain text).
//! 5. Inline transforms run on the block's content and the block is emitted.
//!
//! Each input line yields exactly one output line. An input that ends inside a
//! fence gets no closing tag; [`Rendered::unterminated_fence`] reports where the
//! open fence started so callers can warn about it.

mod block;
pub mod escape;
mod inline;

pub use block::{Block, BULLET_MARKERS, DOUBLE_RULE_CHAR};

/// Marker that opens and closes a verbatim region.
pub const FENCE_MARKER: &str = "```";

/// Language tag used when an opening fence carries none.
pub const DEFAULT_FENCE_LANGUAGE: &str = "plaintext";

const FENCE_CLOSE: &str = "</code></pre>";

/// Knobs for the line renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Language tag for fences opened without one.
    pub default_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_FENCE_LANGUAGE.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }
}

/// Fence state of a scan. Created per call, never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Text,
    /// Inside a fenced region opened on the given 1-based line.
    Verbatim { opened_at: usize },
}

/// Output of [`Renderer::render_lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// One HTML line per input line, in input order.
    pub lines: Vec<String>,
    /// 1-based line of an opening fence that was never closed.
    pub unterminated_fence: Option<usize>,
}

impl Rendered {
    /// The rendered body: all lines joined with `\n`.
    pub fn body(&self) -> String {
        self.lines.join("\n")
    }

    pub fn into_body(self) -> String {
        self.lines.join("\n")
    }
}

/// Line-oriented markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `text` into an HTML body string. Never fails.
    pub fn render(&self, text: &str) -> String {
        self.render_lines(text).into_body()
    }

    /// Render `text`, keeping the individual lines and the fence report.
    pub fn render_lines(&self, text: &str) -> Rendered {
        let mut state = ScanState::Text;
        let mut lines = Vec::new();

        for (index, line) in text.split('\n').enumerate() {
            if let Some(rest) = line.trim().strip_prefix(FENCE_MARKER) {
                match state {
                    ScanState::Verbatim { .. } => {
                        lines.push(FENCE_CLOSE.to_string());
                        state = ScanState::Text;
                    }
                    ScanState::Text => {
                        lines.push(self.fence_open(rest.trim()));
                        state = ScanState::Verbatim {
                            opened_at: index + 1,
                        };
                    }
                }
                continue;
            }

            if let ScanState::Verbatim { .. } = state {
                lines.push(line.to_string());
                continue;
            }

            let escaped = escape::escape_text(line);
            lines.push(Block::classify(&escaped).to_html());
        }

        let unterminated_fence = match state {
            ScanState::Verbatim { opened_at } => Some(opened_at),
            ScanState::Text => None,
        };
        tracing::debug!(
            lines = lines.len(),
            unterminated_fence = ?unterminated_fence,
            "rendered markdown"
        );

        Rendered {
            lines,
            unterminated_fence,
        }
    }

    fn fence_open(&self, tag: &str) -> String {
        let language = if tag.is_empty() {
            tracing::trace!(
                default = %self.options.default_language,
                "fence without language tag"
            );
            self.options.default_language.as_str()
        } else {
            tag
        };
        format!(
            r#"<pre class="code-block"><code class="language-{}">"#,
            escape::escape_attribute(language)
        )
    }
}

/// Render `text` with the default options.
pub fn render(text: &str) -> String {
    Renderer::new().render(text)
}

//! Block-level classification of a single escaped line.
//!
//! A line is classified once, before inline transforms run, and the first rule
//! that matches decides how the whole line is emitted:
//!
//! | Rule        | Pattern (escaped line)   | Output                                   |
//! |-------------|--------------------------|------------------------------------------|
//! | header      | `#{1,6}` + space + text  | `<hN>…</hN>`                             |
//! | rule        | `---` (trimmed)          | `<hr>`                                   |
//! | double rule | one or more `═`          | `<hr class="double">`                    |
//! | todo        | `- [ ] text`             | `<li class="todo">☐ …</li>`              |
//! | done        | `- [x] text`             | `<li class="done">☑ …</li>`              |
//! | bullet      | `•`, `-` or `*` + space  | `<li>…</li>`                             |
//! | blockquote  | `&gt;` + space           | `<blockquote>…</blockquote>`             |
//! | blank       | empty or whitespace      | `<br>`                                   |
//!
//! Checkboxes are tested before bullets, otherwise `- [x] done` would be read
//! as a bullet whose text is `[x] done`.

use super::inline;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that open an unordered list item.
pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Character that draws a double-style horizontal rule.
pub const DOUBLE_RULE_CHAR: char = '═';

const RULE_MARKER: &str = "---";

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("header pattern is valid"));
static TODO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \[ \] (.+)$").expect("todo pattern is valid"));
static DONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \[x\] (.+)$").expect("done pattern is valid"));
static BULLET_REGEX: Lazy<Regex> = Lazy::new(|| {
    let markers: String = BULLET_MARKERS
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Regex::new(&format!(r"^[{markers}]\s+(.+)$")).expect("bullet pattern is valid")
});
// `>` has already been escaped by the time lines are classified.
static QUOTE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^&gt;\s+(.+)$").expect("blockquote pattern is valid"));

/// The block-level shape of one line, borrowing its content from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Header { level: usize, content: &'a str },
    Rule,
    DoubleRule,
    Todo(&'a str),
    Done(&'a str),
    Bullet(&'a str),
    Quote(&'a str),
    Blank,
    Text(&'a str),
}

impl<'a> Block<'a> {
    /// Classify an escaped line. Rules are tried in precedence order.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = HEADER_REGEX.captures(line) {
            if let (Some(marks), Some(content)) = (caps.get(1), caps.get(2)) {
                return Block::Header {
                    level: marks.as_str().len(),
                    content: content.as_str(),
                };
            }
        }

        let trimmed = line.trim();
        if trimmed == RULE_MARKER {
            return Block::Rule;
        }
        if !trimmed.is_empty() && trimmed.chars().all(|c| c == DOUBLE_RULE_CHAR) {
            return Block::DoubleRule;
        }

        if let Some(content) = capture(&TODO_REGEX, line) {
            return Block::Todo(content);
        }
        if let Some(content) = capture(&DONE_REGEX, line) {
            return Block::Done(content);
        }
        if let Some(content) = capture(&BULLET_REGEX, line) {
            return Block::Bullet(content);
        }
        if let Some(content) = capture(&QUOTE_REGEX, line) {
            return Block::Quote(content);
        }

        if trimmed.is_empty() {
            return Block::Blank;
        }
        Block::Text(line)
    }

    /// Emit the block as one line of HTML, running inline transforms on its content.
    pub fn to_html(self) -> String {
        match self {
            Block::Header { level, content } => {
                format!("<h{level}>{}</h{level}>", inline::apply(content))
            }
            Block::Rule => "<hr>".to_string(),
            Block::DoubleRule => r#"<hr class="double">"#.to_string(),
            Block::Todo(content) => {
                format!(r#"<li class="todo">☐ {}</li>"#, inline::apply(content))
            }
            Block::Done(content) => {
                format!(r#"<li class="done">☑ {}</li>"#, inline::apply(content))
            }
            Block::Bullet(content) => format!("<li>{}</li>", inline::apply(content)),
            Block::Quote(content) => {
                format!("<blockquote>{}</blockquote>", inline::apply(content))
            }
            Block::Blank => "<br>".to_string(),
            Block::Text(text) => inline::apply(text),
        }
    }
}

fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

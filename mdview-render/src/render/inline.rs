//! Inline transforms: emphasis, code spans and links.
//!
//! The transforms run as an ordered list of regex substitutions over a single,
//! already-escaped line. Order is significant:
//!
//! 1. `***text***` → `<strong><em>text</em></strong>`
//! 2. `**text**`   → `<strong>text</strong>`
//! 3. `*text*`     → `<em>text</em>`
//! 4. `` `text` `` → `<code class="inline-code">text</code>`
//! 5. `[label](target)` → `<a href="target" target="_blank">label</a>`
//!
//! Emphasis runs before code spans, so a `*x*` inside backticks is turned into
//! `<em>` before the code span wraps it. Consumers rely on that ordering.
//!
//! Every pattern excludes its own delimiter from the captured run, which keeps
//! matching non-greedy and linear (the `regex` crate never backtracks).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Emphasis and code substitutions, applied in declaration order.
static SPAN_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\*\*\*([^*]+)\*\*\*", "<strong><em>${1}</em></strong>"),
        (r"\*\*([^*]+)\*\*", "<strong>${1}</strong>"),
        (r"\*([^*]+)\*", "<em>${1}</em>"),
        (r"`([^`]+)`", r#"<code class="inline-code">${1}</code>"#),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("inline span pattern is valid"),
            replacement,
        )
    })
    .collect()
});

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// Apply every inline transform to an escaped line.
pub fn apply(line: &str) -> String {
    let mut out = line.to_string();
    for (regex, replacement) in SPAN_RULES.iter() {
        out = regex.replace_all(&out, *replacement).into_owned();
    }

    LINK_REGEX
        .replace_all(&out, |caps: &Captures| {
            // The target is already text-escaped; only quotes can still break out
            // of the attribute.
            let href = caps[2].replace('"', "&quot;");
            format!(r#"<a href="{href}" target="_blank">{}</a>"#, &caps[1])
        })
        .into_owned()
}

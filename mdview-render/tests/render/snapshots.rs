//! Whole-body snapshots of the dialect.

use insta::assert_snapshot;
use mdview_render::render;

const KITCHENSINK: &str = include_str!("../fixtures/kitchensink.md");

#[test]
fn kitchensink_body() {
    assert_snapshot!(render(KITCHENSINK), @r#"
<h1>Project Notes</h1>
<h2>Status <em>today</em></h2>
<br>
Some <strong>bold</strong>, <em>italic</em> and <strong><em>both</em></strong> text with <code class="inline-code">code</code> and a <a href="https://example.com" target="_blank">link</a>.
<li class="todo">☐ write docs</li>
<li class="done">☑ ship release</li>
<li>plain item</li>
<li>starred item</li>
<li>dotted item</li>
<blockquote>quoted <strong>words</strong></blockquote>
<hr>
<hr class="double">
<pre class="code-block"><code class="language-rust">
fn main() { let x = a < b && *c*; }
</code></pre>
Tom &amp; Jerry &lt;3
####### not a header
"#);
}

//! Behaviour of the markdown dialect, line by line.

use mdview_render::{render, Renderer};
use rstest::rstest;

#[rstest]
#[case("# Title", 1)]
#[case("## Title", 2)]
#[case("### Title", 3)]
#[case("#### Title", 4)]
#[case("##### Title", 5)]
#[case("###### Title", 6)]
fn header_level_follows_marker_count(#[case] line: &str, #[case] level: usize) {
    assert_eq!(render(line), format!("<h{level}>Title</h{level}>"));
}

#[rstest]
#[case("####### Title")]
#[case("#Title")]
#[case("# ")]
fn not_a_header(#[case] line: &str) {
    assert!(!render(line).starts_with("<h"));
}

#[test]
fn seven_markers_fall_through_to_text() {
    assert_eq!(render("####### Title"), "####### Title");
}

#[test]
fn reserved_characters_are_escaped_outside_fences() {
    assert_eq!(render("a < b > c & d"), "a &lt; b &gt; c &amp; d");
}

#[test]
fn already_escaped_text_is_escaped_once() {
    assert_eq!(render("&amp;"), "&amp;amp;");
}

#[test]
fn fenced_content_is_verbatim() {
    let html = render("```lang\n<b>*CODE*</b> & more\n```");
    assert_eq!(
        html,
        "<pre class=\"code-block\"><code class=\"language-lang\">\n<b>*CODE*</b> & more\n</code></pre>"
    );
}

#[test]
fn unterminated_fence_has_no_close_tag() {
    let html = render("```lang\nCODE");
    assert_eq!(
        html,
        "<pre class=\"code-block\"><code class=\"language-lang\">\nCODE"
    );
}

#[test]
fn unterminated_fence_line_is_reported() {
    let rendered = Renderer::new().render_lines("# Doc\n\n```lang\nCODE");
    assert_eq!(rendered.unterminated_fence, Some(3));
}

#[test]
fn checked_item_is_never_a_generic_bullet() {
    let html = render("- [x] done");
    assert_eq!(html, "<li class=\"done\">☑ done</li>");
    assert!(!html.contains("[x]"));
}

#[test]
fn unchecked_item() {
    assert_eq!(render("- [ ] todo"), "<li class=\"todo\">☐ todo</li>");
}

#[test]
fn star_bullet_is_a_list_item_not_emphasis() {
    assert_eq!(render("* one *two*"), "<li>one <em>two</em></li>");
}

#[test]
fn blank_line_is_one_break() {
    assert_eq!(render(""), "<br>");
    assert_eq!(render("   "), "<br>");
}

#[test]
fn link_opens_in_new_context() {
    assert_eq!(
        render("[text](http://x)"),
        "<a href=\"http://x\" target=\"_blank\">text</a>"
    );
}

#[test]
fn link_target_ampersand_is_escaped() {
    assert_eq!(
        render("[q](http://x/?a=1&b=2)"),
        "<a href=\"http://x/?a=1&amp;b=2\" target=\"_blank\">q</a>"
    );
}

#[test]
fn blockquote_strips_marker() {
    assert_eq!(render("> wise *words*"), "<blockquote>wise <em>words</em></blockquote>");
}

#[test]
fn rules() {
    assert_eq!(render("---"), "<hr>");
    assert_eq!(render("══════"), "<hr class=\"double\">");
}

#[test]
fn unmatched_markers_degrade_to_text() {
    assert_eq!(render("**half [link]( `tick"), "**half [link]( `tick");
}

#[test]
fn emphasis_inside_inline_code_is_transformed() {
    assert_eq!(
        render("`*x*`"),
        "<code class=\"inline-code\"><em>x</em></code>"
    );
}

#[test]
fn one_output_line_per_input_line() {
    let input = "# a\n\n- b\n```\nc\n```\n> d";
    let rendered = Renderer::new().render_lines(input);
    assert_eq!(rendered.lines.len(), 7);
}

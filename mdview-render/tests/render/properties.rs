//! Property tests for escaping and line preservation.

use mdview_render::render;
use mdview_render::render::escape::escape_text;
use proptest::prelude::*;

proptest! {
    #[test]
    fn line_count_is_preserved(input in any::<String>()) {
        let output = render(&input);
        prop_assert_eq!(output.split('\n').count(), input.split('\n').count());
    }

    #[test]
    fn plain_text_is_only_escaped(input in "[a-z&<>]{1,40}") {
        let output = render(&input);
        prop_assert_eq!(&output, &escape_text(&input));
        prop_assert!(!output.contains('<'));
        prop_assert!(!output.contains('>'));
    }

    #[test]
    fn fenced_lines_are_untouched(code in "[ -~]{0,60}") {
        prop_assume!(!code.trim().starts_with("```"));
        let output = render(&format!("```\n{code}\n```"));
        let lines: Vec<&str> = output.split('\n').collect();
        prop_assert_eq!(lines.len(), 3);
        prop_assert_eq!(lines[1], code.as_str());
    }
}

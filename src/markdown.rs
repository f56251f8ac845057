use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Strip `**bold**` and `*italic*` emphasis markers from generated text.
///
/// Only paired markers on the same line are removed; a lone `*` (a bullet or
/// a multiplication sign) is left alone.
pub fn clean_markdown_formatting(text: &str) -> String {
    let without_bold = BOLD.replace_all(text, "$1");
    ITALIC.replace_all(&without_bold, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(clean_markdown_formatting("**Hi** *there*"), "Hi there");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let text = "Boil the pasta for 8 minutes.\nDrain and serve.";
        assert_eq!(clean_markdown_formatting(text), text);
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(
            clean_markdown_formatting("**Step 1:** chop. **Step 2:** *gently* fry."),
            "Step 1: chop. Step 2: gently fry."
        );
    }

    #[test]
    fn test_unpaired_markers_survive() {
        assert_eq!(clean_markdown_formatting("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(
            clean_markdown_formatting("* eggs\n* flour"),
            "* eggs\n* flour"
        );
    }

    #[test]
    fn test_pairs_do_not_span_lines() {
        assert_eq!(
            clean_markdown_formatting("*Tip\nmore* text *here*"),
            "*Tip\nmore text here*"
        );
    }

    #[test]
    fn test_bold_italic_combined() {
        assert_eq!(clean_markdown_formatting("***Serve hot***"), "Serve hot");
    }
}

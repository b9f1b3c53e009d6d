//! Content filter for extracted document text.
//!
//! Strips headers, page numbers, and other short boilerplate lines before
//! spending prompt budget on them.

/// Minimum trimmed line length (in characters) for a line to be kept.
pub const MIN_LINE_CHARS: usize = 30;

/// Keep only the lines whose trimmed length exceeds [`MIN_LINE_CHARS`],
/// joined by newlines, preserving the original order.
pub fn filter_relevant_content(text: &str) -> String {
    text.lines()
        .filter(|line| line.trim().chars().count() > MIN_LINE_CHARS)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_short_lines() {
        let text = "Chapter 1\n\
                    The mitochondria is the powerhouse of the cell in biology.\n\
                    Page 3\n\
                    Photosynthesis converts light energy into chemical energy stores.";
        let filtered = filter_relevant_content(text);
        assert_eq!(
            filtered,
            "The mitochondria is the powerhouse of the cell in biology.\n\
             Photosynthesis converts light energy into chemical energy stores."
        );
    }

    #[test]
    fn length_is_measured_after_trimming() {
        // 10 visible chars padded with spaces: still too short.
        let padded = format!("{}short line{}", " ".repeat(40), " ".repeat(40));
        assert_eq!(filter_relevant_content(&padded), "");
    }

    #[test]
    fn threshold_is_exclusive() {
        let exactly_30 = "a".repeat(30);
        let exactly_31 = "a".repeat(31);
        assert_eq!(filter_relevant_content(&exactly_30), "");
        assert_eq!(filter_relevant_content(&exactly_31), exactly_31);
    }

    #[test]
    fn preserves_order_and_content() {
        let a = "First retained line with more than thirty characters in it.";
        let b = "Second retained line also has more than thirty characters.";
        let text = format!("{a}\nskip\n{b}");
        assert_eq!(filter_relevant_content(&text), format!("{a}\n{b}"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 31 multibyte chars: must be retained.
        let line = "ñ".repeat(31);
        assert_eq!(filter_relevant_content(&line), line);
    }

    #[test]
    fn empty_input() {
        assert_eq!(filter_relevant_content(""), "");
    }
}

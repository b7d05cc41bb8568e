use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r]+").unwrap());
static LINE_EDGES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" ?\n ?").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize raw extractor output: collapse whitespace runs to a single
/// space, collapse runs of blank lines to exactly one blank line, and trim.
/// Applied to the PDF path only — the image placeholder is already fixed.
pub fn normalize_text(text: &str) -> String {
    let collapsed = SPACE_RUNS.replace_all(text, " ");
    let trimmed_lines = LINE_EDGES.replace_all(&collapsed, "\n");
    let compacted = BLANK_RUNS.replace_all(&trimmed_lines, "\n\n");
    compacted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_space_runs() {
        assert_eq!(normalize_text("a   b\t\tc"), "a b c");
    }

    #[test]
    fn collapses_blank_line_runs_to_one_blank_line() {
        assert_eq!(normalize_text("para one\n\n\n\npara two"), "para one\n\npara two");
    }

    #[test]
    fn keeps_single_line_breaks() {
        assert_eq!(normalize_text("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn trims_whitespace_around_lines_and_edges() {
        assert_eq!(normalize_text("  hello \n  world  "), "hello\nworld");
    }

    #[test]
    fn blank_lines_of_spaces_count_as_blank() {
        assert_eq!(normalize_text("a\n   \n   \nb"), "a\n\nb");
    }

    #[test]
    fn clean_text_is_unchanged() {
        assert_eq!(normalize_text("already clean"), "already clean");
    }

    #[test]
    fn whitespace_only_input_becomes_empty() {
        assert_eq!(normalize_text(" \n\t \n "), "");
    }
}

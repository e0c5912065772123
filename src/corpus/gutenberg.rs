//! Project Gutenberg boilerplate stripping.
//!
//! Gutenberg e-texts wrap the book in a license header and footer delimited
//! by `*** START OF ...` and `*** END OF ...` marker lines. Stripping keeps
//! only the lines strictly between the two markers. A text without a start
//! marker is kept from its first line, and one without an end marker is kept
//! to its last.

const START_MARKER: &str = "*** START OF";
const END_MARKER: &str = "*** END OF";

/// Return the body lines of a Gutenberg text.
///
/// # Examples
///
/// ```
/// use tidyword::corpus::gutenberg::strip_boilerplate;
///
/// let lines = vec![
///     "The Project Gutenberg eBook of Emma".to_string(),
///     "*** START OF THE PROJECT GUTENBERG EBOOK EMMA ***".to_string(),
///     "CHAPTER I".to_string(),
///     "*** END OF THE PROJECT GUTENBERG EBOOK EMMA ***".to_string(),
///     "License text".to_string(),
/// ];
/// assert_eq!(strip_boilerplate(lines), vec!["CHAPTER I".to_string()]);
/// ```
pub fn strip_boilerplate(lines: Vec<String>) -> Vec<String> {
    let start = lines
        .iter()
        .position(|line| is_marker(line, START_MARKER))
        .map(|idx| idx + 1)
        .unwrap_or(0);

    let end = lines[start..]
        .iter()
        .position(|line| is_marker(line, END_MARKER))
        .map(|idx| start + idx)
        .unwrap_or(lines.len());

    lines.into_iter().skip(start).take(end - start).collect()
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_start().to_ascii_uppercase().starts_with(marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_markers_keeps_everything() {
        let input = lines(&["a", "b"]);
        assert_eq!(strip_boilerplate(input.clone()), input);
    }

    #[test]
    fn test_start_marker_only() {
        let input = lines(&[
            "header",
            "*** Start of this Project Gutenberg eBook",
            "body",
        ]);
        assert_eq!(strip_boilerplate(input), lines(&["body"]));
    }

    #[test]
    fn test_end_marker_only() {
        let input = lines(&[
            "body",
            "*** END OF THIS PROJECT GUTENBERG EBOOK",
            "footer",
        ]);
        assert_eq!(strip_boilerplate(input), lines(&["body"]));
    }
}

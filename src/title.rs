use crate::error::{Error, Result};

/// Return the text of the first `# ` line in the document.
///
/// Leading indentation before the `#` is ignored, and the title is trimmed.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# This is a title", "This is a title")]
    #[case("  #   Title with whitespace  ", "Title with whitespace")]
    #[case("#   My Title   ", "My Title")]
    #[case("# ", "")]
    #[case("\nSome introductory text.\n\n# The Real Title\n\nMore text.\n", "The Real Title")]
    #[case("\n# The Title Line\nThis is not part of the title.\n", "The Title Line")]
    #[case("# First H1\n\n# Second H1", "First H1")]
    #[case("# Title\n\nHello **world**", "Title")]
    fn extracts(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case("\n## Not an H1\n### Also not H1\n\nSome text.\n")]
    #[case("Just a paragraph.\n\nAnother paragraph.")]
    #[case("#NoSpace")]
    #[case("")]
    fn missing_h1(#[case] markdown: &str) {
        assert_eq!(extract_title(markdown), Err(Error::MissingTitle));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            Error::MissingTitle.to_string(),
            "Markdown must contain an H1 header"
        );
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6} ").unwrap());

const CODE_FENCE: &str = "```";

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A trimmed chunk of the source document together with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

/// Split a document on blank lines into trimmed, non-empty blocks.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single trimmed block. The first matching rule wins:
/// quote, unordered list, ordered list, heading, code, paragraph.
pub fn classify(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }

    if lines.len() == 1 && HEADING_REGEX.is_match(block) {
        let level = block.bytes().take_while(|&b| b == b'#').count() as u8;
        return BlockKind::Heading { level };
    }

    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockKind::Code;
    }

    BlockKind::Paragraph
}

/// Segment and classify a whole document.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    segment(markdown)
        .into_iter()
        .map(|text| Block {
            text,
            kind: classify(text),
        })
        .collect()
}

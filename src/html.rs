use crate::block::{self, Block, BlockKind};
use crate::error::Result;
use crate::inline::text_to_spans;
use crate::node::{HtmlNode, Leaf};

const FENCE_LEN: usize = 3;

/// Convert a markdown document into a single `div` tree.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = block::parse(markdown);

    // A parent cannot be empty, so an empty document is a bare `div` leaf.
    if blocks.is_empty() {
        return Ok(Leaf::tagged("div", "").into());
    }

    let children = blocks
        .iter()
        .map(block_to_html_node)
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent("div", children)
}

/// Convert markdown to an HTML string.
pub fn render_document(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.render()
}

fn block_to_html_node(block: &Block<'_>) -> Result<HtmlNode> {
    match block.kind {
        BlockKind::Paragraph => HtmlNode::parent("p", text_to_children(block.text)?),
        BlockKind::Heading { level } => heading_to_html_node(block.text, level),
        BlockKind::Code => code_to_html_node(block.text),
        BlockKind::Quote => quote_to_html_node(block.text),
        BlockKind::UnorderedList => list_to_html_node("ul", block.text, unordered_item_text),
        BlockKind::OrderedList => list_to_html_node("ol", block.text, ordered_item_text),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    text_to_spans(text)?
        .iter()
        .map(|span| span.to_html_node().map(HtmlNode::from))
        .collect()
}

fn heading_to_html_node(text: &str, level: u8) -> Result<HtmlNode> {
    let heading = text[usize::from(level)..].trim();
    HtmlNode::parent(&format!("h{level}"), text_to_children(heading)?)
}

fn code_to_html_node(text: &str) -> Result<HtmlNode> {
    // Shorter than two fences means there is nothing between them.
    let inner = text
        .get(FENCE_LEN..text.len().saturating_sub(FENCE_LEN))
        .unwrap_or("");
    let inner = inner.strip_prefix('\n').unwrap_or(inner);

    let code = HtmlNode::parent("code", vec![Leaf::text(inner).into()])?;
    HtmlNode::parent("pre", vec![code])
}

fn quote_to_html_node(text: &str) -> Result<HtmlNode> {
    let joined = text
        .split('\n')
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
        .collect::<Vec<_>>()
        .join("\n");
    HtmlNode::parent("blockquote", text_to_children(&joined)?)
}

fn list_to_html_node(tag: &str, text: &str, item_text: fn(&str) -> &str) -> Result<HtmlNode> {
    let items = text
        .split('\n')
        .map(|line| HtmlNode::parent("li", text_to_children(item_text(line))?))
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent(tag, items)
}

fn unordered_item_text(line: &str) -> &str {
    line.get(2..).unwrap_or("")
}

/// Everything after the first space that follows the first `.`.
fn ordered_item_text(line: &str) -> &str {
    let search_from = line.find('.').map_or(0, |dot| dot + 1);
    match line[search_from..].find(' ') {
        Some(space) => &line[search_from + space + 1..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraphs() {
        let md = "This is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with _italic_ text and `code` here";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><p>This is <b>bolded</b> paragraph\ntext in a p\ntag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        let md = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn code_block_drops_only_one_leading_newline() {
        assert_eq!(
            render_document("```\n \n  x\n```").unwrap(),
            "<div><pre><code> \n  x\n</code></pre></div>"
        );
    }

    #[test]
    fn single_line_code_block() {
        assert_eq!(
            render_document("``` text ```").unwrap(),
            "<div><pre><code> text </code></pre></div>"
        );
    }

    #[test]
    fn bare_fence_is_an_empty_code_block() {
        assert_eq!(
            render_document("```").unwrap(),
            "<div><pre><code></code></pre></div>"
        );
    }

    #[test]
    fn headings() {
        let md = "# H1 **bold**\n\n## H2 _italic_\n\n###### H6";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><h1>H1 <b>bold</b></h1><h2>H2 <i>italic</i></h2><h6>H6</h6></div>"
        );
    }

    #[test]
    fn multi_line_headings_are_a_paragraph() {
        let md = "# Heading 1 **bold**\n## Heading 2 _italic_\n### Heading 3 `code`";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><p># Heading 1 <b>bold</b>\n## Heading 2 <i>italic</i>\n### Heading 3 <code>code</code></p></div>"
        );
    }

    #[test]
    fn quote_block() {
        let md = "> This is a quote.\n> This is the second line.\n>\n> And a third line after an empty one.";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><blockquote>This is a quote.\nThis is the second line.\n\nAnd a third line after an empty one.</blockquote></div>"
        );
    }

    #[test]
    fn unordered_list() {
        let md = "- Item 1 **bold**\n- Item 2 _italic_\n- Item 3";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><ul><li>Item 1 <b>bold</b></li><li>Item 2 <i>italic</i></li><li>Item 3</li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        let md = "1. First item `code`\n2. Second item\n3. Third item **bold**";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><ol><li>First item <code>code</code></li><li>Second item</li><li>Third item <b>bold</b></li></ol></div>"
        );
    }

    #[test]
    fn ordered_item_text_skips_marker() {
        assert_eq!(ordered_item_text("10. ten"), "ten");
        assert_eq!(ordered_item_text("1. a. b"), "a. b");
    }

    #[test]
    fn links_and_images() {
        let md = "See [docs](https://boot.dev) and ![logo](/logo.png)";
        assert_eq!(
            render_document(md).unwrap(),
            r#"<div><p>See <a href="https://boot.dev">docs</a> and <img src="/logo.png" alt="logo"></img></p></div>"#
        );
    }

    #[test]
    fn mixed_blocks() {
        let md = "# Title\n\nThis is a paragraph.\n\n> A quote.\n\n```\ncode here\n```\n\n- list item\n\n1. ordered item\n\n## Subheading\n\nAnother paragraph.";
        assert_eq!(
            render_document(md).unwrap(),
            "<div><h1>Title</h1><p>This is a paragraph.</p><blockquote>A quote.</blockquote><pre><code>code here\n</code></pre><ul><li>list item</li></ul><ol><li>ordered item</li></ol><h2>Subheading</h2><p>Another paragraph.</p></div>"
        );
    }

    #[test]
    fn title_and_bold_paragraph() {
        assert_eq!(
            render_document("# Title\n\nHello **world**").unwrap(),
            "<div><h1>Title</h1><p>Hello <b>world</b></p></div>"
        );
    }

    #[test]
    fn empty_documents_render_empty_div() {
        for md in ["", "   \n\n \t \n \n\n  ", "\n\n\n\n"] {
            assert_eq!(render_document(md).unwrap(), "<div></div>");
        }
    }

    #[test]
    fn text_is_not_escaped() {
        assert_eq!(
            render_document("a < b & c").unwrap(),
            "<div><p>a < b & c</p></div>"
        );
    }

    #[test]
    fn unbalanced_markup_fails_the_document() {
        let err = render_document("fine\n\nsnake_case word").unwrap_err();
        assert!(matches!(err, Error::UnbalancedDelimiter { ref delimiter, .. } if delimiter == "_"));
    }

    #[test]
    fn empty_quote_has_no_children() {
        assert_eq!(
            render_document(">").unwrap_err(),
            Error::MissingChildren {
                tag: "blockquote".into()
            }
        );
    }
}

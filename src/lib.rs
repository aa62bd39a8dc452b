mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod site;
mod span;
mod title;

pub use block::{Block, BlockKind, classify, segment};
pub use config::{Config, ConfigError, PathsConfig, SiteConfig};
pub use error::{Error, Result};
pub use html::{markdown_to_html_node, render_document};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_delimiter, split_images, split_links,
    text_to_spans,
};
pub use node::{Attributes, HtmlNode, Leaf, Parent};
pub use site::{
    BuildReport, SiteError, apply_template, build_site, copy_static, generate_page,
    generate_pages_recursive,
};
pub use span::{Span, SpanKind};
pub use title::extract_title;

/// Segment and classify markdown text into blocks.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    block::parse(markdown)
}

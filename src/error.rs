use thiserror::Error;

use crate::span::SpanKind;

/// Errors raised while converting markdown to HTML.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Leaf nodes require a value")]
    MissingValue,

    #[error("ParentNode requires a tag")]
    MissingTag,

    #[error("ParentNode <{tag}> requires children")]
    MissingChildren { tag: String },

    #[error("Invalid Markdown syntax: Unbalanced delimiter '{delimiter}' in text: {text}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("Invalid span of kind {kind}: {reason}")]
    InvalidSpan { kind: SpanKind, reason: &'static str },

    #[error("Markdown must contain an H1 header")]
    MissingTitle,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Inline span splitting.
//!
//! Raw text starts out as a single [`SpanKind::Text`] span and is refined by
//! a fixed sequence of passes. Each pass only looks at plain-text spans;
//! anything already typed passes through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::span::{Span, SpanKind};

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// Same shape as an image without the leading `!`. The regex crate has no
// lookbehind, so image-prefixed matches are rejected in `link_matches`.
static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// One `[label](url)` occurrence inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occurrence<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

fn image_matches(text: &str) -> Vec<Occurrence<'_>> {
    IMAGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Occurrence {
                start: whole.start(),
                end: whole.end(),
                label: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

fn link_matches(text: &str) -> Vec<Occurrence<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(caps) = LINK_REGEX.captures_at(text, pos) {
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            // `[` is one byte; resume just past it.
            pos = whole.start() + 1;
            continue;
        }
        found.push(Occurrence {
            start: whole.start(),
            end: whole.end(),
            label: label.as_str(),
            url: url.as_str(),
        });
        pos = whole.end();
    }
    found
}

/// All `![alt](url)` pairs in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    image_matches(text)
        .into_iter()
        .map(|o| (o.label.to_string(), o.url.to_string()))
        .collect()
}

/// All `[anchor](url)` pairs in `text` that are not images, left to right.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    link_matches(text)
        .into_iter()
        .map(|o| (o.label.to_string(), o.url.to_string()))
        .collect()
}

fn split_occurrences(
    spans: Vec<Span>,
    find: for<'a> fn(&'a str) -> Vec<Occurrence<'a>>,
    make: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }
        match split_span(&span.text, find, make) {
            Some(pieces) => out.extend(pieces),
            None => out.push(span),
        }
    }
    out
}

/// `None` when `text` has no occurrences, so the caller keeps the original span.
fn split_span(
    text: &str,
    find: for<'a> fn(&'a str) -> Vec<Occurrence<'a>>,
    make: fn(&str, &str) -> Span,
) -> Option<Vec<Span>> {
    let found = find(text);
    if found.is_empty() {
        return None;
    }

    let mut pieces = Vec::with_capacity(found.len() * 2 + 1);
    let mut last_end = 0;
    for occurrence in found {
        if occurrence.start > last_end {
            pieces.push(Span::text(&text[last_end..occurrence.start]));
        }
        pieces.push(make(occurrence.label, occurrence.url));
        last_end = occurrence.end;
    }
    if last_end < text.len() {
        pieces.push(Span::text(&text[last_end..]));
    }
    Some(pieces)
}

/// Split `![alt](url)` out of plain-text spans into image spans.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_occurrences(spans, image_matches, |alt, url| Span::image(alt, url))
}

/// Split `[text](url)` out of plain-text spans into link spans.
///
/// Run after [`split_images`]; an occurrence preceded by `!` is never a link.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_occurrences(spans, link_matches, |text, url| Span::link(text, url))
}

/// Split plain-text spans on `delimiter`, typing the enclosed parts as `kind`.
///
/// Fails if any span holds an odd number of delimiters. Empty outer parts are
/// dropped; empty inner parts are kept.
pub fn split_delimiter(spans: Vec<Span>, delimiter: &str, kind: SpanKind) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(Span::new(part, kind));
            } else if !part.is_empty() {
                out.push(Span::text(part));
            }
        }
    }
    Ok(out)
}

/// Run the full inline pipeline over `text`.
///
/// Pass order is images, links, `**` bold, `_` italic, then `` ` `` code.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::text(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    split_delimiter(spans, "`", SpanKind::Code)
}

// src/core/html.rs
// DOM helpers over `scraper`. Tag names from html5ever are already lowercase.

use std::ops::Deref;

use scraper::{ElementRef, Html};

use super::sanitize::{contains_ci, normalize_ws};
use crate::config::consts::CELL_SEP;

/// A raw tree node (element, text, comment, ...).
pub type DomNode<'a> = <ElementRef<'a> as Deref>::Target;

/// One unit of content inside a section, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { rank: u8, text: String },
    Text(String),
}

/// `Some(1..=6)` for `h1`..`h6`.
pub fn heading_rank(el: &ElementRef) -> Option<u8> {
    match el.value().name() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_text_block(name: &str) -> bool {
    matches!(name, "p" | "li" | "dt" | "dd" | "blockquote" | "pre")
}

fn is_ignored(name: &str) -> bool {
    matches!(name, "script" | "style" | "noscript" | "template" | "nav")
}

fn is_inline(name: &str) -> bool {
    matches!(
        name,
        "a" | "abbr" | "b" | "br" | "cite" | "code" | "em" | "i" | "mark" | "q" | "s"
            | "small" | "span" | "strong" | "sub" | "sup" | "time" | "u" | "var"
    )
}

/// Heading, text block or table row somewhere below `el`.
fn has_structure(el: &ElementRef) -> bool {
    el.descendants().skip(1).filter_map(ElementRef::wrap).any(|d| {
        let name = d.value().name();
        heading_rank(&d).is_some() || is_text_block(name) || name == "tr"
    })
}

fn inside_ignored(el: &ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| is_ignored(a.value().name()))
}

/// Raw text under `el`; non-inline children are padded with spaces so
/// adjacent blocks don't run together.
fn push_text(el: &ElementRef, buf: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            buf.push_str(text);
        } else if let Some(c) = ElementRef::wrap(child) {
            let name = c.value().name();
            if is_ignored(name) {
                continue;
            }
            if name == "br" {
                buf.push(' ');
                continue;
            }
            let spaced = !is_inline(name);
            if spaced { buf.push(' '); }
            push_text(&c, buf);
            if spaced { buf.push(' '); }
        }
    }
}

/// All visible text under `el`, whitespace-normalised.
pub fn element_text(el: &ElementRef) -> String {
    let mut buf = String::new();
    push_text(el, &mut buf);
    normalize_ws(&buf)
}

/// `<tr>` cells joined with the cell separator, empty cells dropped.
pub fn row_text(tr: &ElementRef) -> String {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .map(|c| element_text(&c))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(CELL_SEP)
}

pub fn page_title(doc: &Html) -> Option<String> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "title")
        .map(|e| element_text(&e))
        .filter(|t| !t.is_empty())
}

pub fn find_by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().id() == Some(id))
}

/// First heading (any rank) whose text contains `needle`, case-insensitive.
/// Headings inside navigation and other skipped chrome never match.
pub fn find_heading<'a>(doc: &'a Html, needle: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| heading_rank(e).is_some() && !inside_ignored(e))
        .find(|e| contains_ci(&element_text(e), needle))
}

/// Flatten the children of `el` into headings and text blocks.
pub fn collect_blocks(el: &ElementRef, out: &mut Vec<Block>) {
    collect_nodes(el.children(), out);
}

/// Flatten a run of sibling nodes. Loose text and inline elements between
/// blocks are gathered into one `Block::Text`; a container with no block or
/// heading inside is a text block of its own.
pub fn collect_nodes<'a>(nodes: impl Iterator<Item = DomNode<'a>>, out: &mut Vec<Block>) {
    let mut inline = String::new();

    for node in nodes {
        if let Some(text) = node.value().as_text() {
            inline.push_str(text);
            continue;
        }
        let Some(el) = ElementRef::wrap(node) else { continue };
        let name = el.value().name();
        if is_ignored(name) {
            continue;
        }

        if let Some(rank) = heading_rank(&el) {
            flush(&mut inline, out);
            let text = element_text(&el);
            if !text.is_empty() {
                out.push(Block::Heading { rank, text });
            }
        } else if is_text_block(name) {
            flush(&mut inline, out);
            push_text_block(element_text(&el), out);
        } else if name == "tr" {
            flush(&mut inline, out);
            push_text_block(row_text(&el), out);
        } else if has_structure(&el) {
            flush(&mut inline, out);
            collect_blocks(&el, out);
        } else if is_inline(name) {
            if name == "br" {
                inline.push(' ');
            } else {
                push_text(&el, &mut inline);
            }
        } else {
            flush(&mut inline, out);
            push_text_block(element_text(&el), out);
        }
    }
    flush(&mut inline, out);
}

fn flush(inline: &mut String, out: &mut Vec<Block>) {
    push_text_block(normalize_ws(inline), out);
    inline.clear();
}

fn push_text_block(text: String, out: &mut Vec<Block>) {
    if !text.is_empty() {
        out.push(Block::Text(text));
    }
}

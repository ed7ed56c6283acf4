// src/render/outline.rs
//! Read the title hierarchy back out of rendered Markdown.
//!
//! Only titles and levels are recovered; bodies are skipped. The `#` title
//! line is the document title and is not part of the outline.

use super::markdown::MAX_HEADING_DEPTH;
use crate::model::CitationNode;

/// `(level, title)` for every node line, in document order.
pub fn read_titles(md: &str) -> Vec<(usize, String)> {
    md.lines().filter_map(outline_line).collect()
}

/// Rebuild chapter trees from rendered Markdown.
/// A line that jumps more than one level deeper is attached one level below
/// the current node.
pub fn read_outline(md: &str) -> Vec<CitationNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<CitationNode> = Vec::new();

    for (level, title) in read_titles(md) {
        while stack.len() > level {
            close_top(&mut stack, &mut roots);
        }
        let level = level.min(stack.len());
        stack.push(CitationNode::new(title, level));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }
    roots
}

fn close_top(stack: &mut Vec<CitationNode>, roots: &mut Vec<CitationNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

fn outline_line(line: &str) -> Option<(usize, String)> {
    if line.starts_with('#') {
        let hashes = line.chars().take_while(|&c| c == '#').count();
        let title = line[hashes..].strip_prefix(' ')?;
        // `#` alone is the document title
        if hashes < 2 || hashes > MAX_HEADING_DEPTH {
            return None;
        }
        return Some((hashes - 2, s!(title.trim())));
    }

    let spaces = line.chars().take_while(|&c| c == ' ').count();
    let title = line[spaces..].strip_prefix("- ")?;
    if spaces % 2 != 0 {
        return None;
    }
    Some((MAX_HEADING_DEPTH - 1 + spaces / 2, s!(title.trim())))
}

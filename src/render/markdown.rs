// src/render/markdown.rs
// Levels map to heading depth `level + 2` (the document title takes `#`).
// Past `######` nodes become nested bullets, two spaces per extra level.

use std::fmt::Write;

use crate::core::sanitize::escape_md_line;
use crate::model::{CitationDocument, CitationNode};

pub const MAX_HEADING_DEPTH: usize = 6;

pub fn render(doc: &CitationDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", doc.title);
    if let Some(p) = &doc.preamble {
        for line in p.lines() {
            let _ = writeln!(out, "{}\n", escape_md_line(line));
        }
    }
    for node in doc.nodes() {
        render_node(&mut out, node);
    }
    out
}

fn render_node(out: &mut String, node: &CitationNode) {
    let depth = node.level + 2;
    if depth <= MAX_HEADING_DEPTH {
        let _ = writeln!(out, "{} {}\n", "#".repeat(depth), node.title);
        if let Some(body) = &node.body {
            for line in body.lines() {
                let _ = writeln!(out, "{}\n", escape_md_line(line));
            }
        }
    } else {
        let indent = "  ".repeat(depth - MAX_HEADING_DEPTH - 1);
        let _ = writeln!(out, "{indent}- {}", node.title);
        if let Some(body) = &node.body {
            for line in body.lines() {
                let _ = writeln!(out, "{indent}  {}", escape_md_line(line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Metadata;

    fn doc_with(chapters: Vec<CitationNode>) -> CitationDocument {
        CitationDocument {
            title: s!("T2.18 India"),
            preamble: None,
            chapters,
            metadata: Metadata { source: s!("x"), scraped_at: s!("y") },
        }
    }

    #[test]
    fn levels_become_heading_marks() {
        let mut ch = CitationNode::new("Cases", 0);
        let mut sec = CitationNode::new("Supreme Court", 1);
        sec.body = Some(s!("cite as (year) vol. SCC page"));
        ch.children.push(sec);
        let md = render(&doc_with(vec![ch]));
        assert_eq!(
            md,
            "# T2.18 India\n\n## Cases\n\n### Supreme Court\n\ncite as (year) vol. SCC page\n\n"
        );
    }

    #[test]
    fn deep_levels_fall_back_to_bullets() {
        let mut n = CitationNode::new("L5", 5);
        n.body = Some(s!("- dash"));
        let mut out = String::new();
        render_node(&mut out, &n);
        assert_eq!(out, "- L5\n  \\- dash\n");

        let mut out = String::new();
        render_node(&mut out, &CitationNode::new("L6", 6));
        assert_eq!(out, "  - L6\n");
    }
}

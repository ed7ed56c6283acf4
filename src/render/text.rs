// src/render/text.rs
// Plain outline: two spaces per level, body lines marked with `| `.

use std::fmt::Write;

use crate::model::CitationDocument;

pub fn render(doc: &CitationDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", doc.title);
    let _ = writeln!(out, "{}\n", "=".repeat(doc.title.chars().count()));
    if let Some(p) = &doc.preamble {
        for line in p.lines() {
            let _ = writeln!(out, "{line}");
        }
        out.push('\n');
    }
    for node in doc.nodes() {
        let indent = "  ".repeat(node.level);
        let _ = writeln!(out, "{indent}{}", node.title);
        if let Some(body) = &node.body {
            for line in body.lines() {
                let _ = writeln!(out, "{indent}  | {line}");
            }
        }
    }
    out
}

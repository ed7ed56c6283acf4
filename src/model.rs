// src/model.rs
//! The restructured citation table.
//!
//! A `CitationDocument` owns one or more chapters; each chapter is the root of
//! a `CitationNode` tree. Levels start at 0 on every chapter and grow by exactly
//! one per nesting step. Trees are built once by the structurer and only read
//! afterwards.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationNode {
    pub title: String,
    pub level: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CitationNode>,
}

impl CitationNode {
    pub fn new(title: impl Into<String>, level: usize) -> Self {
        Self { title: title.into(), level, body: None, children: Vec::new() }
    }

    /// This node plus all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CitationNode::node_count).sum::<usize>()
    }

    /// Longest root-to-leaf chain, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(CitationNode::depth).max().unwrap_or(0)
    }

    /// Depth-first, document order.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![self] }
    }

    /// Add `text` as a new paragraph of the body.
    pub(crate) fn push_body(&mut self, text: &str) {
        match &mut self.body {
            Some(b) => {
                b.push('\n');
                b.push_str(text);
            }
            None => self.body = Some(s!(text)),
        }
    }

    /// Every level is parent level + 1 all the way down.
    pub fn levels_consistent(&self) -> bool {
        self.children
            .iter()
            .all(|c| c.level == self.level + 1 && c.levels_consistent())
    }
}

pub struct DepthFirst<'a> {
    stack: Vec<&'a CitationNode>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a CitationNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub scraped_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
    pub chapters: Vec<CitationNode>,
    pub metadata: Metadata,
}

impl CitationDocument {
    pub fn node_count(&self) -> usize {
        self.chapters.iter().map(CitationNode::node_count).sum()
    }

    pub fn depth(&self) -> usize {
        self.chapters.iter().map(CitationNode::depth).max().unwrap_or(0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CitationNode> {
        self.chapters.iter().flat_map(CitationNode::iter)
    }

    /// `(level, title)` for every node, depth-first.
    pub fn titles(&self) -> Vec<(usize, String)> {
        self.nodes().map(|n| (n.level, n.title.clone())).collect()
    }
}

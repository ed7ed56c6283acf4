// src/pages/india.rs

use chrono::Local;
use scraper::{ElementRef, Html};
use tracing::{debug, info, warn};

use crate::config::options::Anchor;
use crate::core::html::{
    Block, collect_blocks, collect_nodes, element_text, find_by_id, find_heading, heading_rank,
    page_title,
};
use crate::error::{Result, ScrapeError};
use crate::model::{CitationDocument, CitationNode, Metadata};

/// Parse `html` and rebuild the citation hierarchy found at `anchor`.
///
/// `source` is only recorded in the metadata. Fails with `ScrapeError::Parse`
/// when the anchor is missing, or when an id anchor holds no headings.
pub fn structure(html: &str, anchor: &Anchor, source: &str) -> Result<CitationDocument> {
    structure_at(html, anchor, source, Local::now().to_rfc3339())
}

/// Same as `structure`, with the `scraped_at` stamp supplied.
pub fn structure_at(
    html: &str,
    anchor: &Anchor,
    source: &str,
    scraped_at: String,
) -> Result<CitationDocument> {
    info!("Parsing content...");
    let doc = Html::parse_document(html);
    let metadata = Metadata { source: s!(source), scraped_at };

    let parsed = match anchor {
        Anchor::Heading(text) => {
            let el = find_heading(&doc, text).ok_or_else(|| {
                ScrapeError::parse(format!("anchor {anchor} not found; page layout may have changed"))
            })?;
            from_heading(el)
        }
        Anchor::Id(id) => {
            let el = find_by_id(&doc, id).ok_or_else(|| {
                ScrapeError::parse(format!("anchor {anchor} not found; page layout may have changed"))
            })?;
            if heading_rank(&el).is_some() {
                from_heading(el)
            } else {
                let fallback = page_title(&doc).unwrap_or_else(|| s!(id.as_str()));
                from_container(el, fallback)?
            }
        }
    };

    let (title, chapters, preamble) = parsed;
    let document = CitationDocument { title, preamble, chapters, metadata };
    info!(
        chapters = document.chapters.len(),
        nodes = document.node_count(),
        depth = document.depth(),
        "Structured citation table"
    );
    Ok(document)
}

type Parsed = (String, Vec<CitationNode>, Option<String>);

/// The anchor heading is the one chapter; its section runs over the following
/// siblings until a heading of the same or higher rank.
fn from_heading(el: ElementRef) -> Parsed {
    let rank = heading_rank(&el).unwrap_or(1);
    let title = element_text(&el);
    debug!(rank, %title, "anchor is a heading");

    let mut blocks = following_blocks(el);
    if let Some(end) = blocks
        .iter()
        .position(|b| matches!(b, Block::Heading { rank: r, .. } if *r <= rank))
    {
        blocks.truncate(end);
    }

    let mut tree = TreeBuilder::default();
    tree.open(rank, &title);
    for b in &blocks {
        tree.feed(b);
    }
    let (chapters, preamble) = tree.finish();
    (title, chapters, preamble)
}

/// Blocks after `el` in document order. A heading wrapped alone in a
/// container (`<header><h2>..</h2></header>`) has no siblings of its own, so
/// climb until there is something after it.
fn following_blocks(el: ElementRef) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut cur = el;
    loop {
        let any = cur.next_siblings().any(|n| {
            n.value().is_element() || n.value().as_text().is_some_and(|t| !t.trim().is_empty())
        });
        if any {
            collect_nodes(cur.next_siblings(), &mut blocks);
            break;
        }
        match cur.parent().and_then(ElementRef::wrap) {
            Some(p) if !matches!(p.value().name(), "body" | "html") => cur = p,
            _ => break,
        }
    }
    blocks
}

fn from_container(el: ElementRef, fallback_title: String) -> Result<Parsed> {
    let mut blocks = Vec::new();
    collect_blocks(&el, &mut blocks);

    if !blocks.iter().any(|b| matches!(b, Block::Heading { .. })) {
        return Err(ScrapeError::parse(
            "anchor element contains no headings; page layout may have changed",
        ));
    }

    let mut tree = TreeBuilder::default();
    for b in &blocks {
        tree.feed(b);
    }
    let (chapters, preamble) = tree.finish();
    if preamble.is_some() {
        warn!("text before the first heading kept as preamble");
    }
    Ok((fallback_title, chapters, preamble))
}

/// Stack of open nodes keyed by heading rank. The stack always holds one node
/// per level, so a new node's level is the stack height after closing every
/// open node of equal or lower importance.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<(u8, CitationNode)>,
    roots: Vec<CitationNode>,
    preamble: Option<String>,
}

impl TreeBuilder {
    fn feed(&mut self, block: &Block) {
        match block {
            Block::Heading { rank, text } => self.open(*rank, text),
            Block::Text(text) => self.text(text),
        }
    }

    fn open(&mut self, rank: u8, title: &str) {
        while self.stack.last().is_some_and(|(r, _)| *r >= rank) {
            self.close_top();
        }
        let level = self.stack.len();
        self.stack.push((rank, CitationNode::new(title, level)));
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some((_, node)) => node.push_body(text),
            None => match &mut self.preamble {
                Some(p) => {
                    p.push('\n');
                    p.push_str(text);
                }
                None => self.preamble = Some(s!(text)),
            },
        }
    }

    fn close_top(&mut self) {
        if let Some((_, node)) = self.stack.pop() {
            match self.stack.last_mut() {
                Some((_, parent)) => parent.children.push(node),
                None => self.roots.push(node),
            }
        }
    }

    fn finish(mut self) -> (Vec<CitationNode>, Option<String>) {
        while !self.stack.is_empty() {
            self.close_top();
        }
        (self.roots, self.preamble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str, anchor: Anchor) -> Result<CitationDocument> {
        structure_at(html, &anchor, "test", s!("2024-01-01T00:00:00+00:00"))
    }

    #[test]
    fn heading_anchor_stops_at_same_rank() {
        let html = r#"<body>
            <h2>T2.17 Hungary</h2><p>skip me</p>
            <h2>T2.18 India</h2>
            <h3>Cases</h3><p>cite SCC</p>
            <h4>Supreme Court</h4>
            <h3>Statutes</h3>
            <h2>T2.19 Indonesia</h2><h3>Not ours</h3>
        </body>"#;
        let doc = run(html, Anchor::Heading(s!("t2.18"))).unwrap();
        assert_eq!(doc.title, "T2.18 India");
        assert_eq!(doc.chapters.len(), 1);
        assert_eq!(doc.node_count(), 4);
        assert_eq!(doc.depth(), 3);
        assert_eq!(doc.chapters[0].children[0].body.as_deref(), Some("cite SCC"));
        assert!(doc.chapters[0].levels_consistent());
    }

    #[test]
    fn skipped_ranks_still_nest_one_level() {
        let html = "<div id=t><h2>A</h2><h5>deep</h5><h3>B</h3></div>";
        let doc = run(html, Anchor::Id(s!("t"))).unwrap();
        let a = &doc.chapters[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].level, 1);
        assert_eq!(a.children[1].level, 1);
        assert!(a.levels_consistent());
    }

    #[test]
    fn container_may_hold_several_chapters() {
        let html = "<title>T2</title><section id=t><p>intro</p><h2>A</h2><h2>B</h2><h3>B1</h3></section>";
        let doc = run(html, Anchor::Id(s!("t"))).unwrap();
        assert_eq!(doc.title, "T2");
        assert_eq!(doc.preamble.as_deref(), Some("intro"));
        let roots: Vec<_> = doc.chapters.iter().map(|c| (c.title.as_str(), c.level)).collect();
        assert_eq!(roots, [("A", 0), ("B", 0)]);
    }

    #[test]
    fn missing_anchor_is_parse_error() {
        let err = run("<h2>Other</h2>", Anchor::default()).unwrap_err();
        assert!(err.is_parse());
        let err = run("<h2>Other</h2>", Anchor::Id(s!("nope"))).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn container_without_headings_is_parse_error() {
        let err = run("<div id=t><p>just text</p></div>", Anchor::Id(s!("t"))).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn id_on_heading_behaves_like_heading_anchor() {
        let html = "<h2 id=india>India</h2><p>rule</p><h2>Next</h2>";
        let doc = run(html, Anchor::Id(s!("india"))).unwrap();
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.chapters[0].body.as_deref(), Some("rule"));
    }

    #[test]
    fn rule_text_outside_paragraphs_is_kept() {
        let html = r#"<h2>T2.18 India</h2><div class="rule">Cite to S.C.C., if therein.</div>
            <h3>Cases</h3>Supreme Court Cases (S.C.C.)
            <h3>Statutes</h3><div><span>Act, 1996</span></div>"#;
        let doc = run(html, Anchor::default()).unwrap();
        let india = &doc.chapters[0];
        assert_eq!(india.body.as_deref(), Some("Cite to S.C.C., if therein."));
        assert_eq!(india.children[0].body.as_deref(), Some("Supreme Court Cases (S.C.C.)"));
        assert_eq!(india.children[1].body.as_deref(), Some("Act, 1996"));
    }

    #[test]
    fn table_of_contents_heading_is_not_the_anchor() {
        let html = r#"<nav><h3>T2.18 India</h3><ul><li>T2.19</li></ul></nav>
            <article><h2>T2.18 India</h2><h3>Cases</h3><p>cite SCC</p></article>"#;
        let doc = run(html, Anchor::default()).unwrap();
        assert_eq!(doc.titles(), vec![(0, s!("T2.18 India")), (1, s!("Cases"))]);
        assert_eq!(doc.chapters[0].children[0].body.as_deref(), Some("cite SCC"));
    }

    #[test]
    fn wrapped_heading_climbs_to_parent_siblings() {
        let html = "<header><h1>T2.18 India</h1></header><main><h2>Cases</h2></main>";
        let doc = run(html, Anchor::default()).unwrap();
        assert_eq!(doc.titles(), vec![(0, s!("T2.18 India")), (1, s!("Cases"))]);
    }
}

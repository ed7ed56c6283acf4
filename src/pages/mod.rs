// src/pages/mod.rs
//! # Page extraction
//!
//! Knows where the citation content lives in the fetched HTML and how to turn
//! it into a `CitationDocument`.
//!
//! ## What lives here
//! - **Anchor lookup**: find the section by element id or by heading text.
//! - **Scope rules**: a heading anchor owns its following siblings up to the
//!   next heading of the same or higher rank; an id anchor owns its descendants.
//! - **Level assignment**: heading ranks are mapped to tree levels so that a
//!   child is always exactly one level below its parent, even when the page
//!   skips ranks (`h2` straight to `h4`).
//!
//! ## What does **not** live here
//! - Network access (`core::net`) and file output (`file`, `render`).
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::Fetcher::fetch → pages::india::structure → render → file
//! ```
//!
//! Extraction is pure: it takes HTML text and returns data, so it is tested
//! offline against fixtures in `tests/fixtures/`.
pub mod india;

pub use india::{structure, structure_at};

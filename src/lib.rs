// src/lib.rs
//! Scrape Bluebook Table T2.18 (India) into an outline document.
//!
//! Pipeline: `core::net` fetches the page, `pages` rebuilds the
//! chapter/section hierarchy as a `model::CitationDocument`, and `file` writes
//! it out through one of the `render` formats. `runner` drives the three
//! stages; `cli` is the command-line front end.

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod model;
pub mod pages;
pub mod progress;
pub mod render;
pub mod runner;

pub use error::{Result, ScrapeError};
pub use model::{CitationDocument, CitationNode};

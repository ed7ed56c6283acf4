// src/runner.rs
use std::path::PathBuf;

use tracing::{error, info};

use crate::{
    config::options::{AppOptions, Source},
    core::net::Fetcher,
    error::Result,
    file, pages,
    progress::{Progress, Stage},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub raw_snapshot: Option<PathBuf>,
    pub node_count: usize,
    pub depth: usize,
}

/// Fetch, structure, write. Any error aborts the run before the output file
/// is touched by a later stage.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    info!("Starting Bluebook scraper...");
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::ALL.len());
    }

    let result = run_stages(opts, progress.as_deref_mut());
    match &result {
        Ok(summary) => {
            info!(nodes = summary.node_count, depth = summary.depth, "Scraping completed!");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
        }
        Err(e) => error!("{e}"),
    }
    result
}

fn run_stages<'p>(
    opts: &AppOptions,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<RunSummary> {
    let source = &opts.fetch.source;

    // Fetch
    let html = match source {
        Source::Remote(url) => Fetcher::new(&opts.fetch)?.fetch(url)?,
        Source::LocalFile(path) => file::read_html(path)?,
    };
    let raw_snapshot = match &opts.fetch.save_raw {
        Some(path) => Some(file::save_raw_html(path, &html)?),
        None => None,
    };
    stage_done(&mut progress, Stage::Fetch, &format!("{} bytes from {}", html.len(), source.describe()));

    // Structure
    let doc = pages::structure(&html, &opts.structure.anchor, &source.describe())?;
    stage_done(
        &mut progress,
        Stage::Structure,
        &format!("{} entries, depth {}", doc.node_count(), doc.depth()),
    );

    // Write
    let output = file::write_document(&opts.export, &doc)?;
    stage_done(&mut progress, Stage::Write, &format!("wrote {}", output.display()));

    Ok(RunSummary { output, raw_snapshot, node_count: doc.node_count(), depth: doc.depth() })
}

fn stage_done<'p>(progress: &mut Option<&mut (dyn Progress + 'p)>, stage: Stage, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
        p.stage_done(stage);
    }
}

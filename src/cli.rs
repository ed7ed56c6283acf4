// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, TARGET_URL};
use crate::config::options::{Anchor, AppOptions, ExportFormat, Source, default_raw_path};
use crate::error::Result;
use crate::log::{self, Verbosity};
use crate::progress::{Progress, Stage};
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(
    name = "bluebook_scrape",
    about = "Fetch Bluebook Table T2.18 (India) and rewrite it as an outline document",
    version
)]
pub struct Cli {
    /// Output file, or a directory (trailing `/`) for the default file name
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Markdown)]
    pub format: ExportFormat,

    /// Page to fetch
    #[arg(long, default_value = TARGET_URL, conflicts_with = "input")]
    pub url: String,

    /// Structure a saved HTML file instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Locate the section by element id
    #[arg(long, value_name = "ID", conflicts_with = "anchor_heading")]
    pub anchor_id: Option<String>,

    /// Locate the section by heading text (default "T2.18")
    #[arg(long, value_name = "TEXT")]
    pub anchor_heading: Option<String>,

    /// Keep a copy of the fetched HTML (default data/bluebook_india_raw.html)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save_raw: Option<Option<PathBuf>>,

    /// Append a _YYYYmmdd_HHMMSS stamp to the output file name
    #[arg(long)]
    pub timestamp: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.fetch.source = match self.input {
            Some(path) => Source::LocalFile(path),
            None => Source::Remote(self.url),
        };
        opts.fetch.timeout = Duration::from_secs(self.timeout);
        opts.fetch.save_raw = self.save_raw.map(|p| p.unwrap_or_else(default_raw_path));

        opts.structure.anchor = match (self.anchor_id, self.anchor_heading) {
            (Some(id), _) => Anchor::Id(id),
            (None, Some(text)) => Anchor::Heading(text),
            (None, None) => Anchor::default(),
        };

        opts.export.format = self.format;
        opts.export.timestamp = self.timestamp;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

/// Prints one line per finished stage to stderr.
pub struct ConsoleProgress {
    total: usize,
    done: usize,
    last: String,
    quiet: bool,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> Self {
        Self { total: 0, done: 0, last: s!(), quiet }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.last = s!(msg);
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        if !self.quiet {
            eprintln!("[{}/{}] {}: {}", self.done, self.total, stage.label(), self.last);
        }
    }
}

/// Parse args from the environment and run the pipeline.
pub fn run() -> Result<RunSummary> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<RunSummary> {
    log::init(Verbosity::from_flags(cli.verbose, cli.quiet), cli.log_file.as_deref())?;

    let mut progress = ConsoleProgress::new(cli.quiet);
    let opts = cli.into_options();
    runner::run(&opts, Some(&mut progress))
}

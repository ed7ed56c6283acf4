// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};

use super::consts::*;
use crate::file::{looks_like_dir_hint, normalize_separators};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub structure: StructureOptions,
    pub export: ExportOptions,
}

/// Where the HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    LocalFile(PathBuf),
}

impl Source {
    /// Human-readable origin, recorded in the document metadata.
    pub fn describe(&self) -> String {
        match self {
            Source::Remote(url) => url.clone(),
            Source::LocalFile(p) => p.display().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub source: Source,
    pub timeout: Duration,
    pub user_agent: String,
    /// Save the fetched HTML verbatim before structuring.
    pub save_raw: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            source: Source::Remote(s!(TARGET_URL)),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            save_raw: None,
        }
    }
}

pub fn default_raw_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_RAW_FILE)
}

/// DOM landmark marking where the citation section starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Element `id` attribute; the section is the element's descendants.
    Id(String),
    /// Text contained in an `h1`..`h6`; the section runs until the next
    /// heading of the same or higher rank.
    Heading(String),
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::Heading(s!(DEFAULT_ANCHOR_HEADING))
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::Id(id) => write!(f, "#{id}"),
            Anchor::Heading(text) => write!(f, "heading \"{text}\""),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StructureOptions {
    pub anchor: Anchor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    /// Append `_YYYYmmdd_HHMMSS` to the file stem.
    pub timestamp: bool,
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out_path_at(Local::now())
    }

    /// Same as `out_path`, with the clock pinned.
    pub fn out_path_at(&self, now: DateTime<Local>) -> PathBuf {
        let out = self.out_path.resolve();
        let mut stem = out.file_stem.to_string_lossy().into_owned();
        if self.timestamp {
            stem = join!(&stem, "_", &now.format(TIMESTAMP_FMT).to_string());
        }
        // A user-supplied extension wins over the format default
        let ext = out.ext.as_deref().unwrap_or(self.format.ext());
        out.dir.join(join!(&stem, ".", ext))
    }

    /// Parse user text into dir + stem (+ explicit extension).
    /// A trailing separator keeps the default file name. Whether the path names
    /// an existing directory is decided later, in `out_path`.
    pub fn set_path(&mut self, text: &str) {
        let s = normalize_separators(text.trim());
        let p = Path::new(&s);

        if looks_like_dir_hint(p) {
            self.out_path = OutputPath { dir: p.to_path_buf(), ..OutputPath::default() };
            return;
        }
        self.out_path.as_given = Some(p.to_path_buf());
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>,
    /// The path as typed, when it had no trailing separator.
    as_given: Option<PathBuf>,
}

impl OutputPath {
    /// An existing directory gets the default file name inside it.
    fn resolve(&self) -> OutputPath {
        match &self.as_given {
            Some(p) if p.is_dir() => OutputPath { dir: p.clone(), ..OutputPath::default() },
            _ => self.clone(),
        }
    }
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
            as_given: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), Path::new("output").join("bluebook_india.md"));
        export.format = ExportFormat::Json;
        assert_eq!(export.out_path(), Path::new("output").join("bluebook_india.json"));
    }

    #[test]
    fn explicit_extension_survives_format_change() {
        let mut export = ExportOptions::default();
        export.set_path("notes/india.txt");
        export.format = ExportFormat::Markdown;
        assert!(export.out_path().to_string_lossy().ends_with("india.txt"));
    }

    #[test]
    fn dir_hint_keeps_default_stem() {
        let mut export = ExportOptions::default();
        export.set_path("somewhere/");
        let out = export.out_path();
        assert_eq!(out.file_name().unwrap(), "bluebook_india.md");
        assert!(out.starts_with("somewhere"));
    }

    #[test]
    fn existing_directory_is_checked_when_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let later = tmp.path().join("made_later");
        let mut export = ExportOptions::default();
        export.set_path(later.to_str().unwrap());
        assert_eq!(export.out_path(), tmp.path().join("made_later.md"));

        std::fs::create_dir(&later).unwrap();
        assert_eq!(export.out_path(), later.join("bluebook_india.md"));
    }

    #[test]
    fn timestamp_goes_on_the_stem() {
        let mut export = ExportOptions::default();
        export.timestamp = true;
        let now = Local.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        let out = export.out_path_at(now);
        assert_eq!(out.file_name().unwrap(), "bluebook_india_20240305_070809.md");
    }

    #[test]
    fn anchor_display() {
        assert_eq!(Anchor::Id(s!("t2-18")).to_string(), "#t2-18");
        assert_eq!(Anchor::default().to_string(), "heading \"T2.18\"");
    }
}

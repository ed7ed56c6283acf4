// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::error::{Result, ScrapeError};
use crate::model::CitationDocument;
use crate::render;

/// Render `doc` per `export` and write it out. Returns the final path.
pub fn write_document(export: &ExportOptions, doc: &CitationDocument) -> Result<PathBuf> {
    let path = export.out_path();
    let contents = render::render(doc, export.format)?;
    write_text(&path, &contents)?;
    info!("Results saved to {}", path.display());
    Ok(path)
}

/// Write the fetched page verbatim.
pub fn save_raw_html(path: &Path, html: &str) -> Result<PathBuf> {
    write_text(path, html)?;
    info!("Raw HTML saved to {}", path.display());
    Ok(path.to_path_buf())
}

pub fn read_html(path: &Path) -> Result<String> {
    info!("Reading: {}", path.display());
    fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))
}

/// Ensure the parent dir exists, then create/truncate `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(|e| ScrapeError::io(parent, e))?;
        }
    }
    fs::write(path, contents).map_err(|e| ScrapeError::io(path, e))
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a").join("b").join("out.md");
        write_text(&path, "hi").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hi");
    }

    #[test]
    fn file_in_the_way_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = write_text(&blocker.join("out.md"), "hi").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn missing_input_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_html(&tmp.path().join("nope.html")).unwrap_err().is_io());
    }

    #[test]
    fn dir_hint() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out/file.md")));
    }
}

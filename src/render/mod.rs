// src/render/mod.rs
use crate::config::options::ExportFormat;
use crate::error::{Result, ScrapeError};
use crate::model::CitationDocument;

pub mod markdown;
pub mod outline;
pub mod text;

/// Render `doc` in `format`. Only JSON serialisation can fail.
pub fn render(doc: &CitationDocument, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(markdown::render(doc)),
        ExportFormat::Text => Ok(text::render(doc)),
        ExportFormat::Json => {
            let mut out = serde_json::to_string_pretty(doc).map_err(ScrapeError::render)?;
            out.push('\n');
            Ok(out)
        }
    }
}

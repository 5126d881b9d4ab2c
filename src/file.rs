// src/file.rs

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::{Result, ScrapeError};
use crate::record::RiderRecord;
use crate::specs::fields::FieldSet;

/// Page HTML from a file, or stdin when `path` is `None` (or `-`).
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            logd!("Reading page from {}", p.display());
            Ok(fs::read_to_string(p)?)
        }
        _ => {
            logd!("Reading page from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Render records per `export.format`.
pub fn render_export(export: &ExportOptions, fields: &FieldSet, records: &[RiderRecord]) -> Result<String> {
    match export.format.delim() {
        Some(sep) => Ok(to_export_string(fields, records, export.include_headers, sep)?),
        None => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write the export to `export.out_path()`, or stdout when unset.
/// Returns the path written to, if any.
pub fn write_export(
    export: &ExportOptions,
    fields: &FieldSet,
    records: &[RiderRecord],
) -> Result<Option<PathBuf>> {
    let contents = render_export(export, fields, records)?;

    match export.out_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(path, contents)?;
            logf!("Wrote {} riders to {}", records.len(), path.display());
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(contents.as_bytes())?;
            out.flush()?;
            Ok(None)
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

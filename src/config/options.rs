// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::DEFAULT_FILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Cell separator for delimited formats; `None` for JSON.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    out_path: Option<PathBuf>, // None → stdout
}

impl ExportOptions {
    pub fn new(format: ExportFormat, include_headers: bool) -> Self {
        Self { format, include_headers, out_path: None }
    }

    pub fn out_path(&self) -> Option<&Path> {
        self.out_path.as_deref()
    }

    /// Parse user text into an output path.
    /// A trailing separator (or an existing directory) means "put the default file in there".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = None;
            return;
        }
        let p = PathBuf::from(s);
        self.out_path = if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            Some(p.join(self.default_file_name()))
        } else {
            Some(p)
        };
    }

    pub fn default_file_name(&self) -> String {
        join!(DEFAULT_FILE, ".", self.format.ext())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!(" json ".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn json_has_no_delimiter() {
        assert_eq!(ExportFormat::Tsv.delim(), Some('\t'));
        assert_eq!(ExportFormat::Json.delim(), None);
    }

    #[test]
    fn dir_hint_gets_default_file() {
        let mut opts = ExportOptions::new(ExportFormat::Tsv, true);
        opts.set_path("some/dir/");
        assert_eq!(opts.out_path(), Some(Path::new("some/dir/startlist.tsv")));

        opts.set_path("riders.txt");
        assert_eq!(opts.out_path(), Some(Path::new("riders.txt")));

        opts.set_path("  ");
        assert_eq!(opts.out_path(), None);
    }
}

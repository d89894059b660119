//! File-backed persistence through an explicitly passed data directory
//!
//! [`DataDir`] is a plain handle owned by whatever owns the process
//! lifetime and passed into every save/load call; there is no ambient
//! global. It resolves the fixed layout `"<root>/json/..."` for JSON
//! documents and `"<root>/csv/..."` for CSV reports, creating directories
//! on demand and rejecting filenames with the wrong extension.

use crate::errors::{DomainError, DomainResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on the data directory used for JSON dumps and CSV reports
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl Default for DataDir {
    /// The conventional `data/` directory relative to the working directory
    fn default() -> Self {
        Self::new("data")
    }
}

impl DataDir {
    /// Create a handle rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this handle
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, subdir: &str, filename: &str, extension: &str) -> DomainResult<PathBuf> {
        if !filename.ends_with(extension) {
            return Err(DomainError::validation(format!(
                "filename {filename:?} must have the {extension} extension"
            )));
        }
        let dir = self.root.join(subdir);
        fs::create_dir_all(&dir)?;
        Ok(dir.join(filename))
    }

    /// Resolve a `.json` filename under `<root>/json`, creating directories
    pub fn json_path(&self, filename: &str) -> DomainResult<PathBuf> {
        self.resolve("json", filename, ".json")
    }

    /// Resolve a `.csv` filename under `<root>/csv`, creating directories
    pub fn csv_path(&self, filename: &str) -> DomainResult<PathBuf> {
        self.resolve("csv", filename, ".csv")
    }

    /// Write a value as a pretty-printed JSON document
    pub fn write_json<T: Serialize>(&self, filename: &str, value: &T) -> DomainResult<()> {
        let path = self.json_path(filename)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "wrote JSON document");
        Ok(())
    }

    /// Read and decode a JSON document
    pub fn read_json<T: DeserializeOwned>(&self, filename: &str) -> DomainResult<T> {
        let path = self.json_path(filename)?;
        let contents = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "read JSON document");
        Ok(value)
    }

    /// Write a CSV report: a header row followed by data rows
    pub fn write_csv(
        &self,
        filename: &str,
        header: &[&str],
        rows: &[Vec<String>],
    ) -> DomainResult<()> {
        let path = self.csv_path(filename)?;
        let mut out = csv_line(header);
        for row in rows {
            out.push_str(&csv_line(row));
        }
        fs::write(&path, out)?;
        tracing::info!(path = %path.display(), rows = rows.len(), "wrote CSV report");
        Ok(())
    }
}

/// Render one CSV line, quoting fields that contain separators or quotes
fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|field| {
            let field = field.as_ref();
            if field.contains(',') || field.contains('"') || field.contains('\n') {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                field.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_enforced() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path());
        assert!(data.json_path("company.json").is_ok());
        assert!(data.json_path("company.txt").is_err());
        assert!(data.csv_path("report.csv").is_ok());
        assert!(data.csv_path("report.json").is_err());
    }

    #[test]
    fn json_round_trip_through_the_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path());
        data.write_json("numbers.json", &vec![1, 2, 3]).unwrap();
        assert!(tmp.path().join("json").join("numbers.json").exists());
        let back: Vec<i32> = data.read_json("numbers.json").unwrap();
        assert_eq!(back, [1, 2, 3]);
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path());
        let err = data.read_json::<Vec<i32>>("absent.json").unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        let line = csv_line(&["plain", "with,comma", "with \"quote\""]);
        assert_eq!(line, "plain,\"with,comma\",\"with \"\"quote\"\"\"\n");
    }
}

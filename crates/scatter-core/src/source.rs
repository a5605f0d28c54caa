// File: crates/scatter-core/src/source.rs
// Summary: Data resource fetching and CSV parsing into raw (all-text) records.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::{Record, Value};

/// The only failure a render can hit: the dataset could not be fetched or parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch '{resource}': {source}")]
    Fetch {
        resource: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),
}

/// Where the dataset text comes from.
pub trait DataSource {
    /// Human-readable name used in log records.
    fn describe(&self) -> String;
    /// Fetch the raw CSV bytes.
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// CSV file on disk (the `data.csv` next to the page).
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        std::fs::read(&self.path).map_err(|source| LoadError::Fetch { resource: self.describe(), source })
    }
}

/// In-memory CSV text, mostly for tests and embedding.
#[derive(Clone, Debug)]
pub struct InlineSource {
    name: String,
    bytes: Vec<u8>,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, text: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), bytes: text.into() }
    }
}

impl DataSource for InlineSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.bytes.clone())
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        (**self).fetch()
    }
}

/// Parse CSV bytes with a header row into text-valued records.
/// Short rows are accepted; their missing trailing fields are simply absent.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut row = Record::new();
        for (name, field) in headers.iter().zip(rec.iter()) {
            row.set(name.as_str(), Value::Text(field.to_string()));
        }
        out.push(row);
    }
    Ok(out)
}

/// Fetch and parse in one step. Exactly one of full dataset or error.
pub fn load<S: DataSource + ?Sized>(source: &S) -> Result<Vec<Record>, LoadError> {
    let bytes = source.fetch()?;
    parse_csv(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows_as_text() {
        let rows = parse_csv(b"state,abbr,poverty\nAlabama,AL,19.3\nAlaska,AK,11.2\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text("state"), Some("Alabama"));
        assert_eq!(rows[1].text("poverty"), Some("11.2"));
    }

    #[test]
    fn short_rows_leave_fields_absent() {
        let rows = parse_csv(b"state,abbr,poverty\nAlabama,AL\n").unwrap();
        assert!(rows[0].get("poverty").is_none());
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = parse_csv(b"state,abbr\n\xff\xfe,AL\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let src = FileSource::new("definitely/not/here/data.csv");
        let err = load(&src).unwrap_err();
        assert!(matches!(err, LoadError::Fetch { .. }));
        assert!(err.to_string().contains("data.csv"));
    }
}

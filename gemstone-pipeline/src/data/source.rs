//! CSV data source for ingestion.

use crate::data::frame::DataFrame;
use crate::data::schema::{SCHEMA_SAMPLE_ROWS, SchemaDefinition, infer_schema};
use crate::error::PipelineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

/// Metadata about where a dataset came from, recorded in the ingestion report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub source_type: String,
    pub location: String,
    pub accessed_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// CsvSource
// ---------------------------------------------------------------------------

/// CSV file data source.
#[derive(Debug, Clone)]
pub struct CsvSource {
    pub path: PathBuf,
    pub delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load the whole file into a [`DataFrame`].
    ///
    /// A file without even a header row is a dataset error. A file with a
    /// header but no record rows loads as an empty frame.
    pub fn load(&self) -> Result<DataFrame, PipelineError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(PipelineError::dataset(format!(
                "empty CSV file: {}",
                self.path.display()
            )));
        }
        let columns: Vec<String> = headers.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(DataFrame::new(columns, rows))
    }

    /// Infer the schema from up to [`SCHEMA_SAMPLE_ROWS`] records, without
    /// loading the whole file.
    pub fn schema(&self) -> Result<SchemaDefinition, PipelineError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(PipelineError::dataset(format!(
                "empty CSV file: {}",
                self.path.display()
            )));
        }
        let columns: Vec<String> = headers.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records().take(SCHEMA_SAMPLE_ROWS) {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(infer_schema(&columns, &rows))
    }

    /// Metadata about this source for provenance tracking.
    pub fn source_info(&self) -> SourceInfo {
        SourceInfo {
            source_type: "csv".to_string(),
            location: self.path.display().to_string(),
            accessed_at: Utc::now(),
        }
    }
}

//! Artifact writing and the ingestion report.
//!
//! CSV artifacts are plain writes: a rerun overwrites whatever a previous
//! run left behind. The JSON report goes through a tmp-file rename so a
//! crash cannot leave a half-written report next to finished artifacts.

use crate::data::frame::DataFrame;
use crate::data::schema::SchemaDefinition;
use crate::data::source::SourceInfo;
use crate::error::PipelineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Hex characters of the raw-file hash kept in a dataset id.
const DATASET_ID_LEN: usize = 12;

/// Write a frame to `path` as headered CSV, truncating any existing file.
pub fn write_frame(path: &Path, frame: &DataFrame) -> Result<(), PipelineError> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&frame.columns)?;
    for row in &frame.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Compute the SHA-256 hash of a file as a hex string.
pub fn hash_file(path: &Path) -> Result<String, PipelineError> {
    let content = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Derive a stable dataset id from the raw artifact's hash.
pub fn dataset_id(raw_sha256: &str) -> String {
    format!("ds-{}", &raw_sha256[..DATASET_ID_LEN.min(raw_sha256.len())])
}

// ---------------------------------------------------------------------------
// IngestionReport
// ---------------------------------------------------------------------------

/// Record of one ingestion run, written next to the artifacts it describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionReport {
    pub dataset_id: String,
    pub source: SourceInfo,
    pub row_count: usize,
    pub column_count: usize,
    pub schema: SchemaDefinition,
    pub train_rows: usize,
    pub test_rows: usize,
    pub raw_data_path: PathBuf,
    pub train_data_path: PathBuf,
    pub test_data_path: PathBuf,
    pub raw_sha256: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl IngestionReport {
    pub const FILE_NAME: &'static str = "ingestion_report.json";

    /// Atomically write the report as pretty JSON into `dir`.
    ///
    /// Returns the path it was written to.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, PipelineError> {
        let path = dir.join(Self::FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(&path, json.as_bytes())?;
        Ok(path)
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Write bytes to a `.tmp` sibling, then rename over the target path.
/// Creates parent directories if they don't exist.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, data)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

//! # gemstone-pipeline — Data Ingestion for Gemstone Price Prediction
//!
//! This crate implements the first stage of the gemstone price pipeline:
//! reading the source CSV, archiving an untouched raw copy, and partitioning
//! the rows into train and test artifacts for the stages downstream.
//!
//! The entry point is [`DataIngestion`]:
//!
//! ```no_run
//! use gemstone_pipeline::{DataIngestion, IngestionConfig};
//!
//! # fn main() -> Result<(), gemstone_pipeline::PipelineError> {
//! let report = DataIngestion::new(IngestionConfig::default()).run()?;
//! println!("ingested {} rows as {}", report.row_count, report.dataset_id);
//! # Ok(())
//! # }
//! ```

// Foundation
pub mod config;
pub mod error;

// Data handling & the ingestion stage
pub mod data;
pub mod ingestion;

// Re-exports
pub use config::{DEFAULT_CONFIG_FILE, IngestionConfig, PipelineConfig, load_config};
pub use data::{CsvSource, DataFrame, IngestionReport, SchemaDefinition, train_test_split};
pub use error::PipelineError;
pub use ingestion::DataIngestion;

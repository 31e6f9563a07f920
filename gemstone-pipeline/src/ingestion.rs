//! The data-ingestion stage.
//!
//! Reads the source CSV, keeps an untouched raw copy, splits the rows into
//! train and test subsets, and records the whole run in an ingestion report.

use crate::config::IngestionConfig;
use crate::data::artifact::{self, IngestionReport};
use crate::data::schema::{SCHEMA_SAMPLE_ROWS, infer_schema};
use crate::data::source::CsvSource;
use crate::data::split::train_test_split;
use crate::error::PipelineError;

/// Runs the ingestion stage described by an [`IngestionConfig`].
pub struct DataIngestion {
    config: IngestionConfig,
}

impl DataIngestion {
    pub fn new(config: IngestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Run the full stage: load, copy raw, split, write subsets, report.
    ///
    /// Any failure underneath comes back as [`PipelineError::Ingestion`]
    /// naming the step that was running, and is logged before returning.
    pub fn run(&self) -> Result<IngestionReport, PipelineError> {
        tracing::info!("Data ingestion started");
        let result = self.execute();
        match &result {
            Ok(report) => {
                tracing::info!(dataset_id = %report.dataset_id, "Data ingestion completed");
            }
            Err(err) => {
                tracing::error!(error = %err, "Data ingestion failed");
            }
        }
        result
    }

    fn execute(&self) -> Result<IngestionReport, PipelineError> {
        let config = &self.config;

        let source = CsvSource::new(&config.source_data_path);
        let frame = source
            .load()
            .map_err(|e| PipelineError::ingestion("reading the source dataset", e))?;
        tracing::info!(
            rows = frame.row_count(),
            columns = frame.column_count(),
            "Dataset read as a data frame"
        );

        for path in [
            &config.raw_data_path,
            &config.train_data_path,
            &config.test_data_path,
        ] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PipelineError::ingestion("creating the artifact directory", e.into())
                })?;
            }
        }
        tracing::info!(dir = %config.artifact_dir().display(), "Artifact directory ready");

        artifact::write_frame(&config.raw_data_path, &frame)
            .map_err(|e| PipelineError::ingestion("writing the raw artifact", e))?;
        tracing::info!(
            path = %config.raw_data_path.display(),
            "Raw dataset saved in artifact folder"
        );

        tracing::info!(
            test_fraction = config.test_fraction,
            seed = ?config.seed,
            "Performing train-test split"
        );
        let (train, test) = train_test_split(&frame, config.test_fraction, config.seed)
            .map_err(|e| PipelineError::ingestion("splitting the dataset", e))?;
        tracing::info!(
            train_rows = train.row_count(),
            test_rows = test.row_count(),
            "Train-test split completed"
        );

        artifact::write_frame(&config.train_data_path, &train)
            .map_err(|e| PipelineError::ingestion("writing the train artifact", e))?;
        artifact::write_frame(&config.test_data_path, &test)
            .map_err(|e| PipelineError::ingestion("writing the test artifact", e))?;

        let raw_sha256 = artifact::hash_file(&config.raw_data_path)
            .map_err(|e| PipelineError::ingestion("hashing the raw artifact", e))?;
        let sample = &frame.rows[..frame.row_count().min(SCHEMA_SAMPLE_ROWS)];
        let schema = infer_schema(&frame.columns, sample);

        let report = IngestionReport {
            dataset_id: artifact::dataset_id(&raw_sha256),
            source: source.source_info(),
            row_count: frame.row_count(),
            column_count: frame.column_count(),
            schema,
            train_rows: train.row_count(),
            test_rows: test.row_count(),
            raw_data_path: config.raw_data_path.clone(),
            train_data_path: config.train_data_path.clone(),
            test_data_path: config.test_data_path.clone(),
            raw_sha256,
            seed: config.seed,
            created_at: chrono::Utc::now(),
        };
        report
            .save(config.artifact_dir())
            .map_err(|e| PipelineError::ingestion("writing the ingestion report", e))?;

        Ok(report)
    }
}

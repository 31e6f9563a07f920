//! Error types for the gemstone-pipeline crate.

use thiserror::Error;

/// Top-level error type for pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Failure raised by the ingestion stage. Wraps whatever went wrong
    /// underneath together with the step that was running at the time.
    #[error("Ingestion failed while {stage}: {source}")]
    Ingestion {
        stage: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn ingestion(stage: impl Into<String>, source: PipelineError) -> Self {
        Self::Ingestion {
            stage: stage.into(),
            source: Box::new(source),
        }
    }
}

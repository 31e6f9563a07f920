//! Data handling — loading, schema inference, splitting, artifact output.

pub mod artifact;
pub mod frame;
pub mod schema;
pub mod source;
pub mod split;

pub use artifact::{IngestionReport, dataset_id, hash_file, write_frame};
pub use frame::DataFrame;
pub use schema::{ColumnSchema, ColumnType, SchemaDefinition, infer_schema};
pub use source::{CsvSource, SourceInfo};
pub use split::train_test_split;

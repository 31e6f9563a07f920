//! Schema definition and type inference for ingested datasets.
//!
//! Inference is observational only: it reports what the cells look like and
//! never changes them. Empty cells count as nulls.

use serde::{Deserialize, Serialize};

/// Rows examined when inferring a column's type.
pub const SCHEMA_SAMPLE_ROWS: usize = 100;

/// Column data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Integer,
    Float,
    String,
    Boolean,
    Null,
    Unknown,
}

/// Schema definition for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    pub columns: Vec<ColumnSchema>,
}

/// Schema for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub dtype: ColumnType,
    pub nullable: bool,
}

/// Infer column type from a sample of cell values.
pub fn infer_column_type(values: &[&str]) -> ColumnType {
    let non_null: Vec<_> = values.iter().filter(|v| !v.is_empty()).collect();
    if non_null.is_empty() {
        return ColumnType::Null;
    }

    let mut has_int = false;
    let mut has_float = false;
    let mut has_bool = false;
    let mut has_string = false;

    for v in &non_null {
        if v.parse::<i64>().is_ok() {
            has_int = true;
        } else if v.parse::<f64>().is_ok() {
            has_float = true;
        } else if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("false") {
            has_bool = true;
        } else {
            has_string = true;
        }
    }

    if has_string {
        return ColumnType::String;
    }
    if has_float {
        return ColumnType::Float;
    }
    if has_int {
        return ColumnType::Integer;
    }
    if has_bool {
        return ColumnType::Boolean;
    }
    ColumnType::Unknown
}

/// Infer a schema from a header and a sample of rows.
pub fn infer_schema(columns: &[String], rows: &[Vec<String>]) -> SchemaDefinition {
    let mut schema_columns = Vec::new();

    for (i, col_name) in columns.iter().enumerate() {
        let values: Vec<&str> = rows
            .iter()
            .filter_map(|row| row.get(i))
            .map(String::as_str)
            .collect();

        let dtype = infer_column_type(&values);
        let nullable = values.iter().any(|v| v.is_empty());

        schema_columns.push(ColumnSchema {
            name: col_name.clone(),
            dtype,
            nullable,
        });
    }

    SchemaDefinition {
        columns: schema_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_column_type_int() {
        assert_eq!(infer_column_type(&["1", "2", "3"]), ColumnType::Integer);
    }

    #[test]
    fn test_infer_column_type_float() {
        assert_eq!(infer_column_type(&["0.23", "1.5"]), ColumnType::Float);
    }

    #[test]
    fn test_infer_column_type_int_float_mix_is_float() {
        assert_eq!(infer_column_type(&["1", "2.5"]), ColumnType::Float);
    }

    #[test]
    fn test_infer_column_type_string() {
        assert_eq!(infer_column_type(&["Ideal", "Premium"]), ColumnType::String);
    }

    #[test]
    fn test_infer_column_type_bool() {
        assert_eq!(infer_column_type(&["true", "FALSE"]), ColumnType::Boolean);
    }

    #[test]
    fn test_infer_column_type_all_empty_is_null() {
        assert_eq!(infer_column_type(&["", ""]), ColumnType::Null);
    }

    #[test]
    fn test_infer_schema() {
        let columns = vec!["cut".to_string(), "price".to_string()];
        let rows = vec![
            vec!["Ideal".to_string(), "326".to_string()],
            vec!["Premium".to_string(), "".to_string()],
        ];
        let schema = infer_schema(&columns, &rows);
        assert_eq!(schema.columns.len(), 2);
        assert_eq!(schema.columns[0].dtype, ColumnType::String);
        assert!(!schema.columns[0].nullable);
        assert_eq!(schema.columns[1].dtype, ColumnType::Integer);
        assert!(schema.columns[1].nullable);
    }
}

//! In-memory tabular data.
//!
//! A [`DataFrame`] holds one CSV worth of data: a header row and the record
//! rows beneath it. Cells are kept as the strings they were read as, so a
//! frame written back out reproduces the source values exactly.

use serde::{Deserialize, Serialize};

/// A table of string cells with named columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFrame {
    /// Column names, in file order.
    pub columns: Vec<String>,
    /// Record rows. Every row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl DataFrame {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the frame has no record rows (the header may still be set).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a new frame containing the rows at `indices`, in that order,
    /// under the same header.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        DataFrame::new(
            vec!["carat".into(), "price".into()],
            vec![
                vec!["0.23".into(), "326".into()],
                vec!["0.29".into(), "334".into()],
                vec!["0.31".into(), "335".into()],
            ],
        )
    }

    #[test]
    fn test_counts() {
        let frame = sample();
        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.column_count(), 2);
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_empty_frame_keeps_header() {
        let frame = DataFrame::new(vec!["carat".into()], vec![]);
        assert!(frame.is_empty());
        assert_eq!(frame.column_count(), 1);
    }

    #[test]
    fn test_select_rows_preserves_order_and_header() {
        let frame = sample();
        let picked = frame.select_rows(&[2, 0]);
        assert_eq!(picked.columns, frame.columns);
        assert_eq!(picked.rows.len(), 2);
        assert_eq!(picked.rows[0][0], "0.31");
        assert_eq!(picked.rows[1][0], "0.23");
    }
}

//! Realization table
//!
//! This module provides the per-generation table of candidate realizations:
//! rows are realization identifiers, columns are response-quantity names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A read-only table of real-valued responses per realization
///
/// Rows are opaque realization identifiers (e.g. ensemble member indices),
/// columns are response-quantity names, both in insertion order. Lookups
/// fail explicitly with [`DataError`] rather than returning a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealizationTable {
    columns: Vec<String>,
    col_index: HashMap<String, usize>,
    row_ids: Vec<String>,
    row_index: HashMap<String, usize>,
    data: Vec<f64>,
}

impl RealizationTable {
    /// Create an empty table with the given columns
    ///
    /// Fails with [`DataError::DuplicateColumn`] if a column name repeats.
    pub fn new<I, S>(columns: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for column in columns {
            let column = column.into();
            if table.col_index.contains_key(&column) {
                return Err(DataError::DuplicateColumn { column });
            }
            table.col_index.insert(column.clone(), table.columns.len());
            table.columns.push(column);
        }
        Ok(table)
    }

    /// Create a table from columns and (id, values) rows
    pub fn from_rows<C, S, R, T>(columns: C, rows: R) -> Result<Self, DataError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = (T, Vec<f64>)>,
        T: Into<String>,
    {
        let mut table = Self::new(columns)?;
        for (id, values) in rows {
            table.push_row(id, values)?;
        }
        Ok(table)
    }

    /// Append a realization row
    ///
    /// Fails with [`DataError::DimensionMismatch`] if the value count does
    /// not match the column count, or [`DataError::DuplicateRow`] if the
    /// identifier is already present.
    pub fn push_row(&mut self, id: impl Into<String>, values: Vec<f64>) -> Result<(), DataError> {
        let id = id.into();
        if values.len() != self.columns.len() {
            return Err(DataError::DimensionMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        if self.row_index.contains_key(&id) {
            return Err(DataError::DuplicateRow { row: id });
        }
        self.row_index.insert(id.clone(), self.row_ids.len());
        self.row_ids.push(id);
        self.data.extend(values);
        Ok(())
    }

    /// Look up a single cell
    pub fn value(&self, row: &str, column: &str) -> Result<f64, DataError> {
        let col = self.column_position(column)?;
        let row = self
            .row_index
            .get(row)
            .copied()
            .ok_or_else(|| DataError::MissingRow {
                row: row.to_string(),
            })?;
        Ok(self.data[row * self.columns.len() + col])
    }

    /// Copy out a column, in row order
    ///
    /// The copy is owned by the caller; selection operations work on it
    /// without aliasing the table.
    pub fn column_values(&self, column: &str) -> Result<Vec<f64>, DataError> {
        let col = self.column_position(column)?;
        let width = self.columns.len();
        Ok(self
            .row_ids
            .iter()
            .enumerate()
            .map(|(row, _)| self.data[row * width + col])
            .collect())
    }

    /// Check whether a row identifier is present
    pub fn contains_row(&self, row: &str) -> bool {
        self.row_index.contains_key(row)
    }

    /// Check whether a column is present
    pub fn contains_column(&self, column: &str) -> bool {
        self.col_index.contains_key(column)
    }

    /// Row identifiers in insertion order
    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.row_ids.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn column_position(&self, column: &str) -> Result<usize, DataError> {
        self.col_index
            .get(column)
            .copied()
            .ok_or_else(|| DataError::MissingColumn {
                column: column.to_string(),
            })
    }
}

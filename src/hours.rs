//! # HoursMatrix
//!
//! The historical hour samples the search optimizes over: one named column
//! per candidate shift, every column holding the same number of
//! non-negative integer samples. Column order fixes which genome bit refers
//! to which shift.

use crate::{
    error::{GeneticError, Result},
    genome::Genome,
};

/// A validated, rectangular table of hour samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursMatrix {
    names: Vec<String>,
    columns: Vec<Vec<u64>>,
}

impl HoursMatrix {
    /// Builds a matrix from named columns.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Ingestion` if there are no columns, the name
    /// count differs from the column count, any column is empty, or the
    /// columns differ in length.
    pub fn new(names: Vec<String>, columns: Vec<Vec<u64>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(GeneticError::Ingestion(
                "Hours table has no columns".to_string(),
            ));
        }

        if names.len() != columns.len() {
            return Err(GeneticError::Ingestion(format!(
                "Hours table has {} names for {} columns",
                names.len(),
                columns.len()
            )));
        }

        let rows = columns[0].len();
        if rows == 0 {
            return Err(GeneticError::Ingestion(
                "Hours table has no samples".to_string(),
            ));
        }

        if let Some((idx, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != rows)
        {
            return Err(GeneticError::Ingestion(format!(
                "Column '{}' has {} samples, expected {}",
                names[idx],
                column.len(),
                rows
            )));
        }

        Ok(Self { names, columns })
    }

    /// Builds a matrix with generated names (`slot_0`, `slot_1`, ...).
    pub fn from_columns(columns: Vec<Vec<u64>>) -> Result<Self> {
        let names = (0..columns.len()).map(|idx| format!("slot_{}", idx)).collect();
        Self::new(names, columns)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_samples(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, idx: usize) -> Option<&[u64]> {
        self.columns.get(idx).map(Vec::as_slice)
    }

    /// Mean of column `idx`, truncated to an integer.
    ///
    /// Samples are summed as `u128`; the mean of `u64` values always fits
    /// back into a `u64`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn floored_mean(&self, idx: usize) -> u64 {
        let column = &self.columns[idx];
        let total: u128 = column.iter().map(|&hours| u128::from(hours)).sum();
        (total / column.len() as u128) as u64
    }

    /// Names of the columns a genome selects, in column order.
    pub fn selected_names(&self, genome: &Genome) -> Vec<&str> {
        genome
            .selected_indices()
            .into_iter()
            .filter_map(|idx| self.names.get(idx).map(String::as_str))
            .collect()
    }
}

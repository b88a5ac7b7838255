//! # Ingestion
//!
//! Loads an hours table from a delimited text file with a header row. The
//! delimiter (tab, comma or semicolon) is sniffed from the header line, every
//! column must parse as non-negative integers, and column order becomes
//! genome bit order. Spaces around names and cells are ignored, so
//! `a, b` reads the same as `a,b`.
//!
//! ```text
//! early;late;night
//! 8;6;0
//! 7;6;2
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::{
    error::{GeneticError, Result, ResultExt},
    hours::HoursMatrix,
};

const CANDIDATE_DELIMITERS: [u8; 3] = [b'\t', b',', b';'];

/// Picks the most frequent of tab, comma and semicolon in `header`.
/// Ties go to the earlier candidate; a header with none of them is read
/// as comma-separated.
pub fn sniff_delimiter(header: &str) -> u8 {
    CANDIDATE_DELIMITERS
        .iter()
        .map(|&delimiter| {
            let hits = header.bytes().filter(|&b| b == delimiter).count();
            (delimiter, hits)
        })
        .fold((b',', 0), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
        .0
}

/// Reads the hours table at `path`.
///
/// # Errors
///
/// - `GeneticError::Other` if the file cannot be opened
/// - `GeneticError::Polars` if the CSV reader fails
/// - `GeneticError::Ingestion` for an empty table, missing or non-integer
///   cells, or negative hours
pub fn load_hours<P: AsRef<Path>>(path: P) -> Result<HoursMatrix> {
    let path = path.as_ref();

    let mut header = String::new();
    BufReader::new(File::open(path).context(format!("Failed to open {}", path.display()))?)
        .read_line(&mut header)?;
    if header.trim().is_empty() {
        return Err(GeneticError::Ingestion(format!(
            "{} has no header row",
            path.display()
        )));
    }

    let separator = sniff_delimiter(&header);
    debug!(path = %path.display(), separator = %(separator as char), "reading hours table");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    frame_to_hours(&df)
}

/// Converts every column of `df` into a column of hour samples.
fn frame_to_hours(df: &DataFrame) -> Result<HoursMatrix> {
    if df.width() == 0 || df.height() == 0 {
        return Err(GeneticError::Ingestion(
            "Hours table has no data".to_string(),
        ));
    }

    let mut names = Vec::with_capacity(df.width());
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().trim().to_string();
        let samples = match column.dtype() {
            dtype if dtype.is_integer() => integer_samples(&name, column)?,
            DataType::String => padded_samples(&name, column.str()?)?,
            dtype => {
                return Err(GeneticError::Ingestion(format!(
                    "Column '{}' holds {} values, expected whole hours",
                    name, dtype
                )))
            }
        };

        names.push(name);
        columns.push(samples);
    }

    HoursMatrix::new(names, columns)
}

fn missing_values(name: &str, count: usize) -> GeneticError {
    GeneticError::Ingestion(format!("Column '{}' has {} missing values", name, count))
}

fn non_negative(name: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        GeneticError::Ingestion(format!("Column '{}' has negative hours: {}", name, value))
    })
}

fn integer_samples(name: &str, column: &Column) -> Result<Vec<u64>> {
    let casted = column.cast(&DataType::Int64)?;
    let values = casted.i64()?;
    if values.null_count() > 0 {
        return Err(missing_values(name, values.null_count()));
    }

    values
        .iter()
        .flatten()
        .map(|value| non_negative(name, value))
        .collect()
}

/// Cells written as `" 2"` after a delimiter followed by a space are read as
/// strings; they count as whole hours once trimmed.
fn padded_samples(name: &str, values: &StringChunked) -> Result<Vec<u64>> {
    if values.null_count() > 0 {
        return Err(missing_values(name, values.null_count()));
    }

    values
        .iter()
        .flatten()
        .map(|cell| {
            let value = cell.trim().parse::<i64>().map_err(|_| {
                GeneticError::Ingestion(format!(
                    "Column '{}' holds '{}', expected whole hours",
                    name, cell
                ))
            })?;
            non_negative(name, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a,b,c"), b',');
        assert_eq!(sniff_delimiter("a;b;c"), b';');
        assert_eq!(sniff_delimiter("a\tb\tc"), b'\t');
        assert_eq!(sniff_delimiter("a;b,c;d"), b';');
        assert_eq!(sniff_delimiter("single"), b',');
    }

    #[test]
    fn test_frame_to_hours() {
        let df = df! {
            "early" => [8i64, 7, 9],
            "late" => [6i64, 6, 6],
        }
        .unwrap();

        let hours = frame_to_hours(&df).unwrap();
        assert_eq!(hours.names(), &["early".to_string(), "late".to_string()]);
        assert_eq!(hours.column(0), Some(&[8, 7, 9][..]));
        assert_eq!(hours.floored_mean(0), 8);
    }

    #[test]
    fn test_frame_to_hours_rejects_negative_values() {
        let df = df! {
            "early" => [8i64, -1],
        }
        .unwrap();

        match frame_to_hours(&df) {
            Err(GeneticError::Ingestion(msg)) => assert!(msg.contains("negative")),
            other => panic!("Expected Ingestion error, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_to_hours_rejects_fractional_hours() {
        let df = df! {
            "early" => [7.5f64, 8.0],
        }
        .unwrap();

        match frame_to_hours(&df) {
            Err(GeneticError::Ingestion(msg)) => assert!(msg.contains("early")),
            other => panic!("Expected Ingestion error, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_to_hours_trims_padded_cells() {
        let df = df! {
            "early" => [8i64, 7],
            " late" => [" 6", " 5"],
        }
        .unwrap();

        let hours = frame_to_hours(&df).unwrap();
        assert_eq!(hours.names(), &["early".to_string(), "late".to_string()]);
        assert_eq!(hours.column(1), Some(&[6, 5][..]));
    }

    #[test]
    fn test_frame_to_hours_rejects_words() {
        let df = df! {
            "early" => ["8", "off"],
        }
        .unwrap();

        match frame_to_hours(&df) {
            Err(GeneticError::Ingestion(msg)) => assert!(msg.contains("'off'")),
            other => panic!("Expected Ingestion error, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_to_hours_rejects_nulls() {
        let df = df! {
            "early" => [Some(8i64), None],
        }
        .unwrap();

        assert!(matches!(
            frame_to_hours(&df),
            Err(GeneticError::Ingestion(_))
        ));
    }
}

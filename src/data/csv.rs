//! CSV loading for regression datasets.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//!
//! Every column except the target is a feature. The target is the last
//! column unless a header names another one.

use std::io::Read;
use std::path::Path;

use crate::data::dataset::Dataset;
use crate::data::error::DataError;

/// Which column holds the regression target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetColumn {
    #[default]
    Last,
    /// Header name; requires a header row.
    Named(String),
}

impl Dataset {
    pub fn from_csv_path<P: AsRef<Path>>(path: P, target: &TargetColumn) -> Result<Dataset, DataError> {
        let file = std::fs::File::open(path)?;
        Dataset::from_csv_reader(std::io::BufReader::new(file), target)
    }

    pub fn from_csv_reader<R: Read>(mut reader: R, target: &TargetColumn) -> Result<Dataset, DataError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        parse_csv(&bytes, target)
    }
}

/// Parses CSV bytes into a `Dataset`.
pub fn parse_csv(data: &[u8], target: &TargetColumn) -> Result<Dataset, DataError> {
    let text = std::str::from_utf8(data).map_err(|_| DataError::NotUtf8)?;

    let mut lines = text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    let header = if lines.peek().map_or(false, |(_, first)| is_header(first)) {
        lines.next().map(|(_, first)| parse_csv_row(first))
    } else {
        None
    };

    let target_override = match (target, &header) {
        (TargetColumn::Last, _) => None,
        (TargetColumn::Named(name), Some(cells)) => Some(
            cells.iter()
                .position(|c| c.trim() == name)
                .ok_or_else(|| DataError::MissingColumn(name.clone()))?,
        ),
        (TargetColumn::Named(name), None) => return Err(DataError::MissingColumn(name.clone())),
    };

    let mut width = header.as_ref().map(Vec::len);
    let mut features = Vec::new();
    let mut targets = Vec::new();

    for (row, line) in lines {
        let cells = parse_csv_row(line);
        let expected = *width.get_or_insert(cells.len());
        if cells.len() != expected {
            return Err(DataError::RaggedRow { row, expected, found: cells.len() });
        }
        if expected < 2 {
            return Err(DataError::TooFewColumns);
        }

        let mut values = parse_floats(&cells, row)?;
        let target_idx = target_override.unwrap_or(expected - 1);
        targets.push(values.remove(target_idx));
        features.push(values);
    }

    if features.is_empty() {
        return Err(DataError::NoRows);
    }

    Ok(Dataset::new(features, targets))
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], row: usize) -> Result<Vec<f64>, DataError> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| DataError::Parse { row, cell: c.clone() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_detected_and_last_column_is_target() {
        let csv = b"rooms,age,price\n6.5,30,24.0\n5.9,78,21.6\n";
        let ds = parse_csv(csv, &TargetColumn::Last).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.features[1], vec![5.9, 78.0]);
        assert_eq!(ds.targets, vec![24.0, 21.6]);
    }

    #[test]
    fn named_target_column() {
        let csv = b"price,rooms\n24.0,6.5\n";
        let ds = parse_csv(csv, &TargetColumn::Named("price".into())).unwrap();
        assert_eq!(ds.targets, vec![24.0]);
        assert_eq!(ds.features[0], vec![6.5]);
    }

    #[test]
    fn missing_named_column() {
        let err = parse_csv(b"a,b\n1,2\n", &TargetColumn::Named("price".into())).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(c) if c == "price"));
    }

    #[test]
    fn quoted_fields_and_blank_lines() {
        let csv = b"\"1.5\",2\n\n\"3\",\"4\"\n";
        let ds = parse_csv(csv, &TargetColumn::Last).unwrap();
        assert_eq!(ds.features, vec![vec![1.5], vec![3.0]]);
    }

    #[test]
    fn reports_row_of_bad_cell() {
        let err = parse_csv(b"x,y\n1,2\n3,oops\n", &TargetColumn::Last).unwrap_err();
        assert!(matches!(err, DataError::Parse { row: 3, .. }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_csv(b"1,2,3\n4,5\n", &TargetColumn::Last).unwrap_err();
        assert!(matches!(err, DataError::RaggedRow { row: 2, expected: 3, found: 2 }));
    }

    #[test]
    fn header_only_has_no_rows() {
        assert!(matches!(parse_csv(b"a,b\n", &TargetColumn::Last), Err(DataError::NoRows)));
    }
}

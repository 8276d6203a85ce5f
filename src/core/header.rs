use crate::domain::model::{RawTable, Table};
use crate::utils::error::{PunchError, Result};

/// Header position drifts between source exports, so the first rows are
/// scanned instead of slicing at a fixed offset.
pub const HEADER_SCAN_ROWS: usize = 10;

pub const PUNCH_COLUMN: &str = "Punch Records";

/// Administrative sequence number, meaningless downstream.
const SEQUENCE_COLUMN: &str = "S.No";

/// Returns the index of the first row (within the scan window) whose cells,
/// lowercased, contain the substring "punch records".
pub fn find_header_row(raw: &RawTable) -> Option<usize> {
    raw.rows.iter().take(HEADER_SCAN_ROWS).position(|row| {
        row.iter()
            .any(|cell| cell.to_lowercase().contains("punch records"))
    })
}

/// Slices the grid from the header row onward, promotes that row to trimmed
/// column names and prunes the sequence column plus any column with a blank
/// name (blank or merged header cells).
pub fn promote_header(raw: RawTable) -> Result<Table> {
    let header_idx = find_header_row(&raw).ok_or(PunchError::MissingHeaderError {
        scanned: HEADER_SCAN_ROWS,
    })?;

    let header: Vec<String> = raw.rows[header_idx]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    let keep: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty() && name.as_str() != SEQUENCE_COLUMN)
        .map(|(index, _)| index)
        .collect();

    let columns: Vec<String> = keep.iter().map(|&index| header[index].clone()).collect();
    let rows: Vec<Vec<String>> = raw
        .rows
        .into_iter()
        .skip(header_idx + 1)
        .map(|row| {
            keep.iter()
                .map(|&index| row.get(index).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    let table = Table { columns, rows };
    if table.column_index(PUNCH_COLUMN).is_none() {
        return Err(PunchError::MissingColumnError {
            available: table.columns,
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> RawTable {
        RawTable::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_header_found_at_row_three() {
        let raw = grid(&[
            &["Attendance Report"],
            &["Period: August"],
            &[""],
            &["Employee Punch Records Report"],
        ]);
        assert_eq!(find_header_row(&raw), Some(3));
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let raw = grid(&[&["S.No", "Name", "PUNCH RECORDS"]]);
        assert_eq!(find_header_row(&raw), Some(0));
    }

    #[test]
    fn test_header_outside_scan_window_is_missed() {
        let mut rows: Vec<Vec<String>> = vec![vec!["filler".to_string()]; 10];
        rows.push(vec!["Punch Records".to_string()]);
        let raw = RawTable::from_rows(rows);
        assert_eq!(find_header_row(&raw), None);
    }

    #[test]
    fn test_missing_header_error() {
        let raw = grid(&[&["Name", "Department"]]);
        let err = promote_header(raw).unwrap_err();
        assert!(matches!(err, PunchError::MissingHeaderError { scanned: 10 }));
    }

    #[test]
    fn test_promote_drops_sequence_and_blank_columns() {
        let raw = grid(&[
            &["Attendance"],
            &["S.No", " Name ", "", "Punch Records"],
            &["1", "Alice", "x", "09:00:00(in)"],
        ]);
        let table = promote_header(raw).unwrap();
        assert_eq!(table.columns, vec!["Name", "Punch Records"]);
        assert_eq!(table.rows, vec![vec!["Alice", "09:00:00(in)"]]);
    }

    #[test]
    fn test_missing_punch_column_lists_available() {
        // Header row matches the scan but the promoted names lack the column.
        let raw = grid(&[
            &["Punch Records Export"],
            &["Name", "Department"],
            &["Alice", "Sales"],
        ]);
        let err = promote_header(raw).unwrap_err();
        match err {
            PunchError::MissingColumnError { available } => {
                assert_eq!(available, vec!["Punch Records Export"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

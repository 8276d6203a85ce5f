use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use encoding_rs::WINDOWS_1252;

use crate::domain::model::RawTable;
use crate::utils::error::{PunchError, Result};

/// Reads raw bytes into an untyped grid; the filename extension drives
/// parser selection. CSV falls back from UTF-8 to Latin-1, `.xls` tries the
/// legacy binary reader before the open format, everything else the reverse.
pub fn read_raw_table(bytes: &[u8], filename: &str) -> Result<RawTable> {
    let lowered = filename.to_lowercase();
    if lowered.ends_with(".csv") {
        read_csv(bytes)
    } else if lowered.ends_with(".xls") {
        read_xls(bytes).or_else(|first| {
            tracing::debug!("xls reader failed for {}: {}", filename, first);
            read_xlsx(bytes).map_err(|_| unreadable(filename))
        })
    } else {
        read_xlsx(bytes).or_else(|first| {
            tracing::debug!("xlsx reader failed for {}: {}", filename, first);
            read_xls(bytes).map_err(|_| unreadable(filename))
        })
    }
}

fn unreadable(filename: &str) -> PunchError {
    PunchError::UnreadableFileError {
        name: filename.to_string(),
    }
}

fn read_csv(bytes: &[u8]) -> Result<RawTable> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("CSV is not valid UTF-8, decoding as Latin-1");
            WINDOWS_1252.decode(bytes).0.into_owned()
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable::from_rows(rows))
}

fn read_xlsx(bytes: &[u8]) -> Result<RawTable> {
    let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))?;
    match workbook.worksheet_range_at(0) {
        Some(range) => Ok(range_to_table(&range?)),
        None => Ok(RawTable::default()),
    }
}

fn read_xls(bytes: &[u8]) -> Result<RawTable> {
    let mut workbook = Xls::new(Cursor::new(bytes.to_vec()))?;
    match workbook.worksheet_range_at(0) {
        Some(range) => Ok(range_to_table(&range?)),
        None => Ok(RawTable::default()),
    }
}

/// Materializes the sheet as a grid anchored at A1: rows and columns before
/// the range's start corner become blank cells so grid positions match what
/// the spreadsheet displays.
fn range_to_table(range: &Range<Data>) -> RawTable {
    let (start_row, start_col) = match range.start() {
        Some(start) => (start.0 as usize, start.1 as usize),
        None => return RawTable::default(),
    };

    let width = start_col + range.width();
    let mut rows: Vec<Vec<String>> = vec![vec![String::new(); width]; start_row];
    for sheet_row in range.rows() {
        let mut row = vec![String::new(); start_col];
        row.extend(sheet_row.iter().map(cell_to_string));
        rows.push(row);
    }
    RawTable::from_rows(rows)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

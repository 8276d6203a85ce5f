/// Untyped grid of cells as read verbatim from an uploaded file.
///
/// No header is assumed; column positions carry no meaning until a header
/// row has been located and promoted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a rectangular grid, padding short rows with blank cells.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Header-promoted table: named columns over string cells. Blank cells are
/// represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Appends a column; `values` must hold one entry per row.
    pub fn push_column(&mut self, name: String, values: Vec<String>) {
        self.columns.push(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let raw = RawTable::from_rows(vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string()],
        ]);
        assert_eq!(raw.rows[1], vec!["d", "", ""]);
    }

    #[test]
    fn test_push_column() {
        let mut table = Table {
            columns: vec!["Name".to_string()],
            rows: vec![vec!["Alice".to_string()], vec!["Bob".to_string()]],
        };
        table.push_column(
            "Department".to_string(),
            vec!["Sales".to_string(), "Ops".to_string()],
        );
        assert_eq!(table.cell(0, "Department"), Some("Sales"));
        assert_eq!(table.cell(1, "Department"), Some("Ops"));
    }
}

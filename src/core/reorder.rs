use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::Table;

static PUNCH_COLUMN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Time In|Time Out|Stay Duration) (\d+)$").unwrap());

const GROUP_PREFIXES: [&str; 3] = ["Time In", "Time Out", "Stay Duration"];

/// Reorders columns into a stable layout: fixed (passthrough) columns first
/// in their original order, then each pair group ascending as Time In,
/// Time Out, Stay Duration, skipping members the table lacks.
pub fn reorder_columns(table: Table) -> Table {
    let mut fixed: Vec<String> = Vec::new();
    let mut groups: BTreeSet<usize> = BTreeSet::new();
    for name in &table.columns {
        match PUNCH_COLUMN_NAME
            .captures(name)
            .and_then(|captures| captures[2].parse::<usize>().ok())
        {
            Some(group) => {
                groups.insert(group);
            }
            None => fixed.push(name.clone()),
        }
    }

    let mut order = fixed;
    for group in groups {
        for prefix in GROUP_PREFIXES {
            let name = format!("{prefix} {group}");
            if table.column_index(&name).is_some() {
                order.push(name);
            }
        }
    }

    let indices: Vec<usize> = order
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| indices.iter().map(|&index| row[index].clone()).collect())
        .collect();

    Table {
        columns: order,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_interleave_after_fixed_columns() {
        let table = Table {
            columns: vec![
                "Name".to_string(),
                "Time In 1".to_string(),
                "Time In 2".to_string(),
                "Time Out 1".to_string(),
                "Time Out 2".to_string(),
                "Department".to_string(),
                "Stay Duration 1".to_string(),
                "Stay Duration 2".to_string(),
            ],
            rows: vec![vec![
                "Alice".to_string(),
                "09:00:00".to_string(),
                "14:00:00".to_string(),
                "13:00:00".to_string(),
                "18:30:00".to_string(),
                "Sales".to_string(),
                "04:00".to_string(),
                "04:30".to_string(),
            ]],
        };
        let reordered = reorder_columns(table);
        assert_eq!(
            reordered.columns,
            vec![
                "Name",
                "Department",
                "Time In 1",
                "Time Out 1",
                "Stay Duration 1",
                "Time In 2",
                "Time Out 2",
                "Stay Duration 2",
            ]
        );
        assert_eq!(
            reordered.rows[0],
            vec!["Alice", "Sales", "09:00:00", "13:00:00", "04:00", "14:00:00", "18:30:00", "04:30"]
        );
    }

    #[test]
    fn test_missing_group_members_are_skipped() {
        let table = Table {
            columns: vec![
                "Name".to_string(),
                "Time In 2".to_string(),
                "Time In 1".to_string(),
                "Time Out 1".to_string(),
            ],
            rows: vec![],
        };
        let reordered = reorder_columns(table);
        assert_eq!(
            reordered.columns,
            vec!["Name", "Time In 1", "Time Out 1", "Time In 2"]
        );
    }

    #[test]
    fn test_lookalike_names_stay_fixed() {
        let table = Table {
            columns: vec!["Time In".to_string(), "Time In 1x".to_string()],
            rows: vec![],
        };
        let reordered = reorder_columns(table);
        assert_eq!(reordered.columns, vec!["Time In", "Time In 1x"]);
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::header::PUNCH_COLUMN;
use crate::domain::model::Table;
use crate::utils::error::{PunchError, Result};

/// Hour is 1-2 digits, minute and second exactly 2. The shape is all that is
/// checked here; out-of-range values like `99:99:99(in)` still match and are
/// only rejected later by time parsing.
static PUNCH_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}:\d{2}:\d{2})\((in|out)\)").unwrap());

/// Extracts tagged timestamps from one punch-record cell as an ordered
/// label/time mapping.
///
/// Pairing is positional, not chronological: two independent 1-based counters
/// label the n-th `in` token `Time In {n}` and the n-th `out` token
/// `Time Out {n}`, regardless of how the tags interleave in the source text.
/// A malformed record (say two `in` tags before any `out`) still pairs by
/// counter position.
pub fn extract_punches(cell: &str) -> Vec<(String, String)> {
    if cell.trim().is_empty() {
        return Vec::new();
    }

    let lowered = cell.to_lowercase();
    let mut punches = Vec::new();
    let mut in_count = 1usize;
    let mut out_count = 1usize;
    for captures in PUNCH_TOKEN.captures_iter(&lowered) {
        let time = captures[1].to_string();
        match &captures[2] {
            "in" => {
                punches.push((format!("Time In {in_count}"), time));
                in_count += 1;
            }
            _ => {
                punches.push((format!("Time Out {out_count}"), time));
                out_count += 1;
            }
        }
    }
    punches
}

/// Replaces the `Punch Records` column with wide `Time In {n}` /
/// `Time Out {n}` columns. The pair-column count is the maximum token count
/// of either tag across all rows; rows with fewer punches are left blank.
pub fn expand_punch_column(table: Table) -> Result<Table> {
    let punch_idx =
        table
            .column_index(PUNCH_COLUMN)
            .ok_or_else(|| PunchError::MissingColumnError {
                available: table.columns.clone(),
            })?;

    let per_row: Vec<Vec<(String, String)>> = table
        .rows
        .iter()
        .map(|row| extract_punches(row.get(punch_idx).map(String::as_str).unwrap_or("")))
        .collect();

    let mut max_in = 0usize;
    let mut max_out = 0usize;
    for punches in &per_row {
        max_in = max_in.max(count_tag(punches, "Time In "));
        max_out = max_out.max(count_tag(punches, "Time Out "));
    }

    let mut columns: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != punch_idx)
        .map(|(_, name)| name.clone())
        .collect();
    for n in 1..=max_in {
        columns.push(format!("Time In {n}"));
    }
    for n in 1..=max_out {
        columns.push(format!("Time Out {n}"));
    }

    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .zip(per_row)
        .map(|(row, punches)| {
            let mut out: Vec<String> = row
                .into_iter()
                .enumerate()
                .filter(|(index, _)| *index != punch_idx)
                .map(|(_, value)| value)
                .collect();
            for n in 1..=max_in {
                out.push(lookup(&punches, &format!("Time In {n}")));
            }
            for n in 1..=max_out {
                out.push(lookup(&punches, &format!("Time Out {n}")));
            }
            out
        })
        .collect();

    Ok(Table { columns, rows })
}

fn count_tag(punches: &[(String, String)], prefix: &str) -> usize {
    punches
        .iter()
        .filter(|(label, _)| label.starts_with(prefix))
        .count()
}

fn lookup(punches: &[(String, String)], label: &str) -> String {
    punches
        .iter()
        .find(|(candidate, _)| candidate == label)
        .map(|(_, time)| time.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_two_pairs() {
        let punches = extract_punches("09:00:00(in)13:00:00(out)14:00:00(in)18:30:00(out)");
        assert_eq!(
            punches,
            vec![
                ("Time In 1".to_string(), "09:00:00".to_string()),
                ("Time Out 1".to_string(), "13:00:00".to_string()),
                ("Time In 2".to_string(), "14:00:00".to_string()),
                ("Time Out 2".to_string(), "18:30:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_extract_blank_cell() {
        assert!(extract_punches("").is_empty());
        assert!(extract_punches("   ").is_empty());
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let punches = extract_punches("09:01:03(IN)18:02:10(Out)");
        assert_eq!(punches[0].0, "Time In 1");
        assert_eq!(punches[1].0, "Time Out 1");
    }

    #[test]
    fn test_extract_single_digit_hour() {
        let punches = extract_punches("9:01:03(in)");
        assert_eq!(punches, vec![("Time In 1".to_string(), "9:01:03".to_string())]);
    }

    #[test]
    fn test_extract_ignores_untagged_and_malformed_tokens() {
        // Valid shape is required: a bare timestamp and a 3-digit hour are skipped.
        let punches = extract_punches("08:00:00 123:00:00(in) 09:00:00(in)");
        assert_eq!(punches.len(), 2);
        assert_eq!(punches[0], ("Time In 1".to_string(), "23:00:00".to_string()));
        assert_eq!(punches[1], ("Time In 2".to_string(), "09:00:00".to_string()));
    }

    #[test]
    fn test_extract_pairs_positionally_not_chronologically() {
        // Two consecutive ins still take positions 1 and 2.
        let punches = extract_punches("09:00:00(in)10:00:00(in)11:00:00(out)");
        assert_eq!(punches[0].0, "Time In 1");
        assert_eq!(punches[1].0, "Time In 2");
        assert_eq!(punches[2].0, "Time Out 1");
    }

    #[test]
    fn test_extract_shape_valid_range_invalid_token_matches() {
        let punches = extract_punches("99:99:99(in)");
        assert_eq!(punches, vec![("Time In 1".to_string(), "99:99:99".to_string())]);
    }

    #[test]
    fn test_expand_uses_max_pair_count_across_rows() {
        let table = Table {
            columns: vec!["Name".to_string(), PUNCH_COLUMN.to_string()],
            rows: vec![
                vec![
                    "Alice".to_string(),
                    "09:00:00(in)13:00:00(out)14:00:00(in)18:30:00(out)".to_string(),
                ],
                vec!["Bob".to_string(), "10:00:00(in)12:00:00(out)".to_string()],
                vec!["Carol".to_string(), String::new()],
            ],
        };
        let expanded = expand_punch_column(table).unwrap();
        assert_eq!(
            expanded.columns,
            vec!["Name", "Time In 1", "Time In 2", "Time Out 1", "Time Out 2"]
        );
        assert_eq!(expanded.cell(0, "Time In 2"), Some("14:00:00"));
        assert_eq!(expanded.cell(1, "Time In 2"), Some(""));
        assert_eq!(expanded.cell(2, "Time In 1"), Some(""));
    }
}

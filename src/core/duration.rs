use chrono::NaiveTime;

use crate::domain::model::Table;

const TIME_FORMAT: &str = "%H:%M:%S";
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Appends a `Stay Duration {n}` column for every pair index where both
/// `Time In {n}` and `Time Out {n}` exist as columns, stopping at the first
/// structurally absent pair. Unparseable or blank cells yield an empty
/// duration, never an error.
pub fn append_stay_durations(table: &mut Table) {
    let mut pair = 1usize;
    loop {
        let in_idx = table.column_index(&format!("Time In {pair}"));
        let out_idx = table.column_index(&format!("Time Out {pair}"));
        let (in_idx, out_idx) = match (in_idx, out_idx) {
            (Some(in_idx), Some(out_idx)) => (in_idx, out_idx),
            _ => break,
        };

        let values: Vec<String> = table
            .rows
            .iter()
            .map(|row| stay_duration(&row[in_idx], &row[out_idx]))
            .collect();
        table.push_column(format!("Stay Duration {pair}"), values);
        pair += 1;
    }
}

/// Elapsed wall-clock time between two `H:MM:SS` times of day, formatted as
/// zero-padded `HH:MM`. An out time earlier than the in time is taken as an
/// overnight shift and wrapped across midnight.
fn stay_duration(time_in: &str, time_out: &str) -> String {
    if time_in.is_empty() || time_out.is_empty() {
        return String::new();
    }

    let parsed_in = NaiveTime::parse_from_str(time_in, TIME_FORMAT);
    let parsed_out = NaiveTime::parse_from_str(time_out, TIME_FORMAT);
    match (parsed_in, parsed_out) {
        (Ok(t_in), Ok(t_out)) => {
            let mut seconds = (t_out - t_in).num_seconds();
            if seconds < 0 {
                seconds += SECONDS_PER_DAY;
            }
            let minutes = seconds / 60;
            format!("{:02}:{:02}", minutes / 60, minutes % 60)
        }
        _ => String::new(),
    }
}

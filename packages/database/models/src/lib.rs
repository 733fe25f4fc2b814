#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Tabular query results and stop-record decoding.
//!
//! Every statement the service runs comes back as a [`Table`]: named
//! columns plus rows of JSON cells. The same shape is handed to the
//! presentation layer, and [`Table::stop_records`] decodes the full
//! `police_logs` fetch into typed [`StopRecord`]s for the analytics code.

use chrono::{NaiveDate, NaiveTime};
use securecheck_stop_models::StopRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An in-memory result set with named columns.
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in result order.
    pub columns: Vec<String>,
    /// Row cells, aligned with [`Table::columns`].
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates a table with the given columns and no rows.
    #[must_use]
    pub const fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a table with no columns and no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Appends a row, padding with `null` or truncating so that it lines up
    /// with the column list.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the named column, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in the named column.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Decodes every row into a [`StopRecord`].
    ///
    /// Missing columns and undecodable cells become `None`; decoding never
    /// fails because stored rows are not validated.
    #[must_use]
    pub fn stop_records(&self) -> Vec<StopRecord> {
        let col = |name: &str| self.column_index(name);
        let stop_date = col("stop_date");
        let stop_time = col("stop_time");
        let country_name = col("country_name");
        let driver_gender = col("driver_gender");
        let driver_age = col("driver_age");
        let driver_race = col("driver_race");
        let search_conducted = col("search_conducted");
        let search_type = col("search_type");
        let stop_duration = col("stop_duration");
        let drugs_related_stop = col("drugs_related_stop");
        let vehicle_number = col("vehicle_number");
        let stop_outcome = col("stop_outcome");
        let violation = col("violation");

        self.rows
            .iter()
            .map(|row| {
                let get = |idx: Option<usize>| idx.and_then(|i| row.get(i));
                StopRecord {
                    stop_date: get(stop_date).and_then(date),
                    stop_time: get(stop_time).and_then(time),
                    country_name: get(country_name).and_then(text),
                    driver_gender: get(driver_gender).and_then(text),
                    driver_age: get(driver_age).and_then(integer),
                    driver_race: get(driver_race).and_then(text),
                    search_conducted: get(search_conducted).and_then(integer),
                    search_type: get(search_type).and_then(text),
                    stop_duration: get(stop_duration).and_then(text),
                    drugs_related_stop: get(drugs_related_stop).and_then(integer),
                    vehicle_number: get(vehicle_number).and_then(text),
                    stop_outcome: get(stop_outcome).and_then(text),
                    violation: get(violation).and_then(text),
                }
            })
            .collect()
    }
}

/// Reads a cell as text. Numbers and booleans are rendered.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads a cell as an integer. Booleans map to `0`/`1`.
#[allow(clippy::cast_possible_truncation)]
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads a cell as a date. Accepts `YYYY-MM-DD` optionally followed by a
/// time component.
fn date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Reads a cell as a time of day. Accepts `HH:MM[:SS[.fff]]`, optionally
/// preceded by a date component.
fn time(value: &Value) -> Option<NaiveTime> {
    let s = value.as_str()?.trim();
    let clock = s.rsplit(['T', ' ']).next().unwrap_or(s);
    NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn push_row_aligns_with_columns() {
        let mut table = Table::new(columns(&["a", "b"]));
        table.push_row(vec![json!(1)]);
        table.push_row(vec![json!(1), json!(2), json!(3)]);

        assert_eq!(table.rows[0], vec![json!(1), Value::Null]);
        assert_eq!(table.rows[1], vec![json!(1), json!(2)]);
        assert_eq!(table.cell(1, "b"), Some(&json!(2)));
        assert_eq!(table.cell(0, "missing"), None);
    }

    #[test]
    fn decodes_stop_records() {
        let mut table = Table::new(columns(&[
            "id",
            "stop_date",
            "stop_time",
            "driver_gender",
            "driver_age",
            "search_conducted",
            "drugs_related_stop",
            "stop_duration",
            "stop_outcome",
            "violation",
        ]));
        table.push_row(vec![
            json!(7),
            json!("2024-03-05"),
            json!("21:15:00"),
            json!("Female"),
            json!("34"),
            json!(true),
            json!(0),
            json!("16-30 Min"),
            json!("Citation"),
            Value::Null,
        ]);

        let records = table.stop_records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.stop_date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(record.stop_time, NaiveTime::from_hms_opt(21, 15, 0));
        assert_eq!(record.driver_gender.as_deref(), Some("Female"));
        assert_eq!(record.driver_age, Some(34));
        assert_eq!(record.search_conducted, Some(1));
        assert_eq!(record.drugs_related_stop, Some(0));
        assert_eq!(record.stop_duration.as_deref(), Some("16-30 Min"));
        assert_eq!(record.stop_outcome.as_deref(), Some("Citation"));
        assert_eq!(record.violation, None);
        assert_eq!(record.country_name, None);
    }

    #[test]
    fn decodes_date_time_text() {
        assert_eq!(
            date(&json!("2023-01-02 00:00:00")),
            NaiveDate::from_ymd_opt(2023, 1, 2)
        );
        assert_eq!(
            time(&json!("1970-01-01 08:05:09")),
            NaiveTime::from_hms_opt(8, 5, 9)
        );
        assert_eq!(time(&json!("08:05")), NaiveTime::from_hms_opt(8, 5, 0));
        assert_eq!(date(&json!("not a date")), None);
    }

    #[test]
    fn integer_accepts_whole_floats_only() {
        assert_eq!(integer(&json!(3.0)), Some(3));
        assert_eq!(integer(&json!(3.5)), None);
        assert_eq!(integer(&json!(false)), Some(0));
    }
}

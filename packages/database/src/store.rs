//! [`StopStore`] backed by a fresh `switchy_database` connection per call.

use async_trait::async_trait;
use moosicbox_json_utils::database::ToValue as _;
use securecheck_database_models::Table;
use serde_json::Value;
use switchy_database::{DatabaseValue, Row};

use crate::db::{self, DatabaseConfig};
use crate::{DbError, StopStore};

/// Runs statements against the configured store, one connection per call.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    config: DatabaseConfig,
}

impl DatabaseStore {
    /// Creates a store for the given configuration. No connection is opened
    /// until the first query.
    #[must_use]
    pub const fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

#[async_trait]
impl StopStore for DatabaseStore {
    async fn query(&self, sql: &str) -> Result<Table, DbError> {
        log::debug!("Opening connection to {}", self.config.describe());
        let conn = db::connect(&self.config).await?;

        let result = conn.query_raw_params(sql, &[]).await;

        // The connection is released here on both the success and failure
        // paths; nothing outlives this call.
        drop(conn);
        log::debug!("Released connection to {}", self.config.describe());

        let rows = result?;
        Ok(rows_to_table(&rows))
    }
}

/// Materializes database rows into a [`Table`].
///
/// Column names come from the first row. An empty result yields a table
/// with no columns.
#[must_use]
pub fn rows_to_table(rows: &[Row]) -> Table {
    let columns: Vec<String> = rows
        .first()
        .map(|row| row.columns.iter().map(|(name, _)| name.clone()).collect())
        .unwrap_or_default();

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(
            row.columns
                .iter()
                .map(|(name, value)| cell_value(row, name, value))
                .collect(),
        );
    }
    table
}

/// Converts the value of `column` in `row` into a JSON cell.
///
/// Integer and real values of any width become JSON numbers, and nullable
/// variants without a value become `null`.
#[must_use]
pub fn cell_value(row: &Row, column: &str, value: &DatabaseValue) -> Value {
    match value {
        DatabaseValue::Null => Value::Null,
        DatabaseValue::String(s) => Value::String(s.clone()),
        DatabaseValue::Bool(b) => Value::Bool(*b),
        DatabaseValue::Int32(i) => Value::from(*i),
        DatabaseValue::Int64(i) => Value::from(*i),
        DatabaseValue::Real64(f) => {
            serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
        }
        DatabaseValue::DateTime(dt) => Value::String(dt.to_string()),
        other => typed_cell(row, column).unwrap_or_else(|| {
            log::debug!("Rendering unmapped value in column {column} as text: {other:?}");
            Value::String(format!("{other:?}"))
        }),
    }
}

/// Reads the remaining value variants (narrow and unsigned integers,
/// single-precision reals, nullable wrappers) through their typed
/// conversions.
fn typed_cell(row: &Row, column: &str) -> Option<Value> {
    let int: Result<Option<i64>, _> = row.to_value(column);
    if let Ok(int) = int {
        return Some(int.map_or(Value::Null, Value::from));
    }

    let real: Result<Option<f64>, _> = row.to_value(column);
    if let Ok(real) = real {
        return Some(
            real.and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number),
        );
    }

    let text: Result<Option<String>, _> = row.to_value(column);
    text.ok().map(|t| t.map_or(Value::Null, Value::String))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;
    use crate::queries::STOP_RECORDS_QUERY;

    fn temp_db(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("securecheck_store_{name}.db"));
        let _ = std::fs::remove_file(&path);
        path
    }

    async fn seed(config: &DatabaseConfig) {
        let conn = db::connect(config).await.unwrap();
        conn.exec_raw(
            "CREATE TABLE police_logs (
                id INTEGER PRIMARY KEY,
                stop_date TEXT,
                stop_time TEXT,
                country_name TEXT,
                driver_gender TEXT,
                driver_age INTEGER,
                driver_race TEXT,
                search_conducted INTEGER,
                search_type TEXT,
                stop_duration TEXT,
                drugs_related_stop INTEGER,
                vehicle_number TEXT,
                stop_outcome TEXT,
                violation TEXT,
                is_arrested INTEGER
            )",
        )
        .await
        .unwrap();
        conn.exec_raw(
            "INSERT INTO police_logs VALUES
                (1, '2024-01-02', '22:10:00', 'Canada', 'Male', 30, 'Asian', 0, NULL,
                 '0-15 Min', 0, 'AB123', 'Warning', 'Speeding', 0),
                (2, '2024-01-03', '09:45:00', 'India', 'Female', 41, 'White', 1, 'Vehicle Search',
                 '16-30 Min', 1, 'CD456', 'Arrest', 'DUI', 1)",
        )
        .await
        .unwrap();
    }

    fn row(cells: Vec<(&str, DatabaseValue)>) -> Row {
        Row {
            columns: cells
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    #[test]
    fn converts_common_values() {
        let rows = [row(vec![
            ("outcome", DatabaseValue::String("Warning".to_string())),
            ("missing", DatabaseValue::Null),
            ("age", DatabaseValue::Int32(27)),
            ("total", DatabaseValue::Int64(3)),
            ("rate", DatabaseValue::Real64(12.5)),
            ("bad_rate", DatabaseValue::Real64(f64::NAN)),
            ("flag", DatabaseValue::Bool(true)),
        ])];

        let table = rows_to_table(&rows);
        assert_eq!(
            table.columns,
            ["outcome", "missing", "age", "total", "rate", "bad_rate", "flag"]
        );
        assert_eq!(
            table.rows[0],
            vec![
                json!("Warning"),
                Value::Null,
                json!(27),
                json!(3),
                json!(12.5),
                Value::Null,
                json!(true),
            ]
        );
    }

    #[test]
    fn typed_conversion_yields_numbers_not_debug_text() {
        let row = row(vec![("hour_of_day", DatabaseValue::Int64(14))]);
        assert_eq!(typed_cell(&row, "hour_of_day"), Some(json!(14)));
    }

    #[tokio::test]
    async fn fetches_stop_records_from_sqlite() {
        let path = temp_db("fetch");
        let config = DatabaseConfig::Sqlite { path: path.clone() };
        seed(&config).await;

        let store = DatabaseStore::new(config);
        let table = store.query(STOP_RECORDS_QUERY).await.unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns.len(), 13);
        assert_eq!(table.cell(1, "country_name"), Some(&json!("India")));

        let records = table.stop_records();
        assert_eq!(records[0].driver_age, Some(30));
        assert_eq!(records[1].search_type.as_deref(), Some("Vehicle Search"));
        assert_eq!(records[1].drugs_related_stop, Some(1));
        assert_eq!(records[0].search_type, None);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn fetches_from_table_without_catalog_columns() {
        let path = temp_db("stop_columns_only");
        let config = DatabaseConfig::Sqlite { path: path.clone() };

        let conn = db::connect(&config).await.unwrap();
        conn.exec_raw(
            "CREATE TABLE police_logs (
                stop_date TEXT,
                stop_time TEXT,
                country_name TEXT,
                driver_gender TEXT,
                driver_age INTEGER,
                driver_race TEXT,
                search_conducted INTEGER,
                search_type TEXT,
                stop_duration TEXT,
                drugs_related_stop INTEGER,
                vehicle_number TEXT,
                stop_outcome TEXT,
                violation TEXT
            )",
        )
        .await
        .unwrap();
        conn.exec_raw(
            "INSERT INTO police_logs VALUES
                ('2024-01-02', '22:10:00', 'Canada', 'Male', 30, 'Asian', 0, NULL,
                 '0-15 Min', 0, 'AB123', 'Warning', 'Speeding')",
        )
        .await
        .unwrap();
        drop(conn);

        let store = DatabaseStore::new(config);
        let records = store.query(STOP_RECORDS_QUERY).await.unwrap().stop_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stop_outcome.as_deref(), Some("Warning"));
        assert_eq!(records[0].driver_age, Some(30));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn each_query_uses_its_own_connection() {
        let path = temp_db("reuse");
        let config = DatabaseConfig::Sqlite { path: path.clone() };
        seed(&config).await;

        let store = DatabaseStore::new(config);
        let first = store
            .query("SELECT COUNT(*) AS total FROM police_logs")
            .await
            .unwrap();
        let second = store
            .query("SELECT COUNT(*) AS total FROM police_logs")
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.cell(0, "total"), Some(&json!(2)));

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn failing_statement_is_reported() {
        let path = temp_db("failing");
        let store = DatabaseStore::new(DatabaseConfig::Sqlite { path: path.clone() });

        let result = store.query("SELECT * FROM no_such_table").await;
        assert!(result.is_err());

        // The store stays usable after a failed statement.
        let table = store.query("SELECT 1 AS one").await.unwrap();
        assert_eq!(table.cell(0, "one"), Some(&json!(1)));

        let _ = std::fs::remove_file(&path);
    }
}

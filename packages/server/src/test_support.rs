//! In-memory store for handler and interaction tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use securecheck_database::queries::STOP_RECORDS_QUERY;
use securecheck_database::{DbError, StopStore};
use securecheck_database_models::Table;
use serde_json::{Value, json};

/// Serves canned tables: the stop log for [`STOP_RECORDS_QUERY`] and a
/// fixed catalog result for everything else.
pub struct FakeStore {
    logs: Table,
    catalog: Table,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl FakeStore {
    pub fn new(logs: Table) -> Self {
        let mut catalog = Table::new(vec!["violation".to_string(), "total".to_string()]);
        catalog.push_row(vec![json!("DUI"), json!(2)]);
        Self {
            logs,
            catalog,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A store whose every query fails as if the server were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Table::empty())
        }
    }

    pub fn with_catalog(mut self, catalog: Table) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl StopStore for FakeStore {
    async fn query(&self, sql: &str) -> Result<Table, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(DbError::Connection {
                message: "connection refused".to_string(),
            });
        }

        if sql == STOP_RECORDS_QUERY {
            Ok(self.logs.clone())
        } else {
            Ok(self.catalog.clone())
        }
    }
}

/// Four stops: two matching a 27-year-old male with no search, no drugs and
/// a 0-15 minute stop, one female drug-related stop, and one older male.
pub fn sample_logs() -> Table {
    let mut table = Table::new(
        [
            "stop_date",
            "stop_time",
            "country_name",
            "driver_gender",
            "driver_age",
            "driver_race",
            "search_conducted",
            "search_type",
            "stop_duration",
            "drugs_related_stop",
            "vehicle_number",
            "stop_outcome",
            "violation",
        ]
        .into_iter()
        .map(ToString::to_string)
        .collect(),
    );

    table.push_row(stop(1, "Male", 27, 0, "0-15 Min", 0, "Arrest", "DUI"));
    table.push_row(stop(2, "Male", 27, 0, "0-15 Min", 0, "Warning", "DUI"));
    table.push_row(stop(3, "Female", 35, 1, "16-30 Min", 1, "Citation", "Speeding"));
    table.push_row(stop(4, "Male", 45, 0, "0-15 Min", 0, "Warning", "Seatbelt"));
    table
}

#[allow(clippy::too_many_arguments)]
fn stop(
    id: i64,
    gender: &str,
    age: i64,
    searched: i64,
    duration: &str,
    drugs: i64,
    outcome: &str,
    violation: &str,
) -> Vec<Value> {
    vec![
        json!("2024-05-01"),
        json!("10:30:00"),
        json!("Canada"),
        json!(gender),
        json!(age),
        json!("Asian"),
        json!(searched),
        if searched == 1 {
            json!("Vehicle Search")
        } else {
            Value::Null
        },
        json!(duration),
        json!(drugs),
        json!(format!("VEH{id:03}")),
        json!(outcome),
        json!(violation),
    ]
}

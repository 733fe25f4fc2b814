//! Per-request session context.
//!
//! An [`Interaction`] lives for exactly one request. It borrows the store,
//! fetches what the request needs, and collects the notices the operator
//! should see. Store failures are recovered here: they become an error
//! notice plus an empty table, so the derived metrics and prediction fall
//! back to their empty-table behavior instead of failing the request.

use securecheck_analytics::catalog::NO_RESULT_MESSAGE;
use securecheck_database::StopStore;
use securecheck_database::queries::STOP_RECORDS_QUERY;
use securecheck_database_models::Table;
use securecheck_server_models::Notice;
use securecheck_stop_models::StopRecord;

/// The full stop table and its decoded records.
#[derive(Debug, Clone, Default)]
pub struct StopLog {
    /// Rows as fetched, for display.
    pub table: Table,
    /// Rows decoded for analytics.
    pub records: Vec<StopRecord>,
}

/// Session-scoped context for one request.
pub struct Interaction<'a> {
    store: &'a dyn StopStore,
    notices: Vec<Notice>,
}

impl<'a> Interaction<'a> {
    /// Starts an interaction against `store`.
    #[must_use]
    pub fn new(store: &'a dyn StopStore) -> Self {
        Self {
            store,
            notices: Vec::new(),
        }
    }

    /// Runs `sql`, returning an empty table (and recording an error notice)
    /// if the store fails.
    pub async fn execute(&mut self, sql: &str) -> Table {
        match self.store.query(sql).await {
            Ok(table) => table,
            Err(e) => {
                log::error!("Query failed: {e}");
                self.notices.push(Notice::error(e.to_string()));
                Table::empty()
            }
        }
    }

    /// Fetches the full stop table once and decodes it.
    pub async fn load_stop_log(&mut self) -> StopLog {
        let table = self.execute(STOP_RECORDS_QUERY).await;
        let records = table.stop_records();
        log::debug!("Loaded {} stop records", records.len());
        StopLog { table, records }
    }

    /// Runs a catalog statement. Returns `None` and records a warning
    /// notice when the result is empty.
    pub async fn run_catalog(&mut self, sql: &str) -> Option<Table> {
        let table = self.execute(sql).await;
        if table.is_empty() {
            self.notices.push(Notice::warning(NO_RESULT_MESSAGE));
            None
        } else {
            Some(table)
        }
    }

    /// Notices collected so far.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Ends the interaction, returning its notices.
    #[must_use]
    pub fn finish(self) -> Vec<Notice> {
        self.notices
    }
}

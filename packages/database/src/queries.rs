//! Statements for reading stop records.
//!
//! Columns are listed explicitly and cast to portable types so the result
//! decodes the same way on `PostgreSQL` and `SQLite`: dates and times come
//! back as text, flags and counts as 64-bit integers.
//!
//! The full-table fetch names only the thirteen stop columns the dashboard
//! reads. `id` and `is_arrested` are used by some catalog statements but are
//! not required here.

/// Fetches every stop record in `police_logs`.
pub const STOP_RECORDS_QUERY: &str = "SELECT
        CAST(stop_date AS TEXT) AS stop_date,
        CAST(stop_time AS TEXT) AS stop_time,
        country_name,
        driver_gender,
        CAST(driver_age AS BIGINT) AS driver_age,
        driver_race,
        CAST(search_conducted AS BIGINT) AS search_conducted,
        search_type,
        stop_duration,
        CAST(drugs_related_stop AS BIGINT) AS drugs_related_stop,
        vehicle_number,
        stop_outcome,
        violation
    FROM police_logs";

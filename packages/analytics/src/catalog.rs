//! Canned analytical queries offered in the dashboard menus.
//!
//! Each tier is a constant, ordered list of `(label, sql)` pairs. The order
//! is the menu order. Statements are self-contained (nothing is
//! substituted) and run unchanged on `PostgreSQL` and `SQLite`. Date parts
//! are cut from the ISO text form of `stop_date`/`stop_time`, and numeric
//! expressions are cast so that rates decode as floats and date parts as
//! integers.

use securecheck_analytics_models::{CatalogEntry, CatalogTier};

/// Notice shown when a catalog query returns no rows.
pub const NO_RESULT_MESSAGE: &str = "No result found for the selected query";

/// Single-table aggregations.
pub const ADVANCED: &[CatalogEntry] = &[
    CatalogEntry {
        label: "What are the top 10 vehicle_Number involved in drug-related stops?",
        sql: "SELECT vehicle_number, COUNT(*) AS drug_related_count
              FROM police_logs
              WHERE drugs_related_stop = 1
              GROUP BY vehicle_number
              ORDER BY drug_related_count DESC
              LIMIT 10",
    },
    CatalogEntry {
        label: "Which vehicles were most frequently searched?",
        sql: "SELECT vehicle_number, COUNT(*) AS search_count
              FROM police_logs
              WHERE search_conducted = 1
              GROUP BY vehicle_number
              ORDER BY search_count DESC",
    },
    CatalogEntry {
        label: "Which driver age group had the highest arrest rate?",
        sql: "SELECT driver_age, COUNT(*) AS arrest_count
              FROM police_logs
              WHERE is_arrested = 1
              GROUP BY driver_age
              ORDER BY arrest_count DESC
              LIMIT 1",
    },
    CatalogEntry {
        label: "What is the average stop duration for different violations?",
        // stop_duration is categorical, so report its most common value.
        // Ties go to the smallest duration; a null duration never wins over
        // a recorded one.
        sql: "SELECT violation, stop_duration AS typical_stop_duration, total_stops
              FROM (
                  SELECT violation, stop_duration,
                         CAST(SUM(duration_count) OVER (PARTITION BY violation) AS BIGINT) AS total_stops,
                         ROW_NUMBER() OVER (
                             PARTITION BY violation
                             ORDER BY CASE WHEN stop_duration IS NULL THEN 1 ELSE 0 END,
                                      duration_count DESC,
                                      stop_duration
                         ) AS duration_rank
                  FROM (
                      SELECT violation, stop_duration, COUNT(*) AS duration_count
                      FROM police_logs
                      GROUP BY violation, stop_duration
                  ) AS duration_counts
              ) AS ranked
              WHERE duration_rank = 1
              ORDER BY violation",
    },
    CatalogEntry {
        label: "What is the gender distribution of drivers stopped in each country?",
        sql: "SELECT country_name, driver_gender, COUNT(*) AS total_stops
              FROM police_logs
              GROUP BY country_name, driver_gender
              ORDER BY country_name, total_stops DESC",
    },
    CatalogEntry {
        label: "Which race and gender combination has the highest search rate?",
        sql: "SELECT driver_race, driver_gender,
                     COUNT(*) AS total_stops,
                     SUM(search_conducted) AS total_searches,
                     CAST(ROUND(100.0 * SUM(search_conducted) / COUNT(*), 2) AS DOUBLE PRECISION) AS search_rate
              FROM police_logs
              GROUP BY driver_race, driver_gender
              ORDER BY search_rate DESC",
    },
    CatalogEntry {
        label: "What time of day sees the most traffic stops?",
        sql: "SELECT CAST(SUBSTR(CAST(stop_time AS TEXT), 1, 2) AS INTEGER) AS hour_of_day,
                     COUNT(*) AS total_stops
              FROM police_logs
              GROUP BY hour_of_day
              ORDER BY total_stops DESC
              LIMIT 1",
    },
    CatalogEntry {
        label: "Are stops during the night more likely to lead to arrests?",
        sql: "SELECT time_of_day,
                     COUNT(*) AS total_stops,
                     SUM(is_arrested) AS total_arrests,
                     CAST(ROUND(100.0 * SUM(is_arrested) / COUNT(*), 2) AS DOUBLE PRECISION) AS arrest_rate
              FROM (
                  SELECT is_arrested,
                         CASE WHEN CAST(SUBSTR(CAST(stop_time AS TEXT), 1, 2) AS INTEGER) >= 20
                                OR CAST(SUBSTR(CAST(stop_time AS TEXT), 1, 2) AS INTEGER) < 6
                              THEN 'Night' ELSE 'Day' END AS time_of_day
                  FROM police_logs
              ) AS t
              GROUP BY time_of_day",
    },
    CatalogEntry {
        label: "Which violations are most associated with searches or arrests?",
        sql: "SELECT violation,
                     COUNT(*) AS total_stops,
                     SUM(search_conducted) AS total_searches,
                     SUM(is_arrested) AS total_arrests
              FROM police_logs
              GROUP BY violation
              ORDER BY total_searches DESC, total_arrests DESC
              LIMIT 10",
    },
    CatalogEntry {
        label: "Which violations are most common among younger drivers (<25)?",
        sql: "SELECT violation, COUNT(*) AS total_stops
              FROM police_logs
              WHERE driver_age < 25
              GROUP BY violation
              ORDER BY total_stops DESC
              LIMIT 10",
    },
    CatalogEntry {
        label: "Is there a violation that rarely results in search or arrest?",
        sql: "SELECT violation
              FROM police_logs
              GROUP BY violation
              ORDER BY (1.0 * SUM(search_conducted) / COUNT(*)
                        + 1.0 * SUM(is_arrested) / COUNT(*)) ASC
              LIMIT 1",
    },
    CatalogEntry {
        label: "Which countries report the highest rate of drug-related stops?",
        sql: "SELECT country_name,
                     CAST(ROUND(100.0 * SUM(drugs_related_stop) / COUNT(*), 2) AS DOUBLE PRECISION) AS drug_related_rate
              FROM police_logs
              GROUP BY country_name
              ORDER BY drug_related_rate DESC
              LIMIT 10",
    },
    CatalogEntry {
        label: "What is the arrest rate by country and violation?",
        sql: "SELECT country_name, violation,
                     CAST(1.0 * SUM(is_arrested) / COUNT(*) AS DOUBLE PRECISION) AS arrest_rate
              FROM police_logs
              GROUP BY country_name, violation
              ORDER BY arrest_rate DESC",
    },
    CatalogEntry {
        label: "Which country has the most stops with search conducted?",
        sql: "SELECT country_name, COUNT(*) AS total_searches
              FROM police_logs
              WHERE search_conducted = 1
              GROUP BY country_name
              ORDER BY total_searches DESC
              LIMIT 1",
    },
];

/// Window functions, subqueries and self-joins.
pub const COMPLEX: &[CatalogEntry] = &[
    CatalogEntry {
        label: "Yearly Breakdown of Stops and Arrests by Country (Using Subquery and Window Functions)",
        sql: "SELECT country_name, stop_year, total_stops, total_arrests,
                     CAST(ROUND(100.0 * total_arrests / total_stops, 2) AS DOUBLE PRECISION) AS arrest_rate_percent,
                     RANK() OVER (PARTITION BY stop_year ORDER BY total_arrests DESC) AS rank_by_arrests
              FROM (
                  SELECT country_name,
                         CAST(SUBSTR(CAST(stop_date AS TEXT), 1, 4) AS INTEGER) AS stop_year,
                         COUNT(*) AS total_stops,
                         SUM(is_arrested) AS total_arrests
                  FROM police_logs
                  GROUP BY country_name, CAST(SUBSTR(CAST(stop_date AS TEXT), 1, 4) AS INTEGER)
              ) AS yearly_data
              ORDER BY stop_year, rank_by_arrests",
    },
    CatalogEntry {
        label: "Driver Violation Trends Based on Age and Race (Join with Subquery)",
        sql: "SELECT p.driver_race, a.age_group,
                     COUNT(*) AS total_stops,
                     SUM(p.is_arrested) AS total_arrests
              FROM police_logs p
              JOIN (
                  SELECT id,
                         CASE WHEN driver_age < 25 THEN 'Under 25'
                              WHEN driver_age BETWEEN 25 AND 40 THEN '25-40'
                              WHEN driver_age BETWEEN 41 AND 60 THEN '41-60'
                              ELSE 'Above 60' END AS age_group
                  FROM police_logs
              ) a ON p.id = a.id
              GROUP BY p.driver_race, a.age_group
              ORDER BY p.driver_race, a.age_group",
    },
    CatalogEntry {
        label: "Time Period Analysis of Stops (Joining with Date Functions) , Number of Stops by Year,Month, Hour of the Day",
        sql: "SELECT CAST(SUBSTR(CAST(stop_date AS TEXT), 1, 4) AS INTEGER) AS stop_year,
                     CAST(SUBSTR(CAST(stop_date AS TEXT), 6, 2) AS INTEGER) AS stop_month,
                     CAST(SUBSTR(CAST(stop_time AS TEXT), 1, 2) AS INTEGER) AS hour_of_day,
                     COUNT(*) AS total_stops
              FROM police_logs
              GROUP BY stop_year, stop_month, hour_of_day
              ORDER BY stop_year, stop_month, hour_of_day",
    },
    CatalogEntry {
        label: "Violations with High Search and Arrest Rates (Window Function)",
        sql: "SELECT violation,
                     COUNT(*) AS total_stops,
                     SUM(search_conducted) AS total_searches,
                     SUM(is_arrested) AS total_arrests,
                     CAST(ROUND(100.0 * SUM(search_conducted) / COUNT(*), 2) AS DOUBLE PRECISION) AS search_rate,
                     CAST(ROUND(100.0 * SUM(is_arrested) / COUNT(*), 2) AS DOUBLE PRECISION) AS arrest_rate,
                     RANK() OVER (ORDER BY SUM(is_arrested) DESC) AS rank_by_arrests
              FROM police_logs
              GROUP BY violation
              ORDER BY rank_by_arrests",
    },
    CatalogEntry {
        label: "Driver Demographics by Country (Age, Gender, and Race)",
        sql: "SELECT country_name, driver_gender, driver_race,
                     CAST(ROUND(AVG(driver_age), 1) AS DOUBLE PRECISION) AS avg_age,
                     COUNT(*) AS total_drivers
              FROM police_logs
              GROUP BY country_name, driver_gender, driver_race
              ORDER BY country_name, driver_gender, driver_race",
    },
    CatalogEntry {
        label: "Top 5 Violations with Highest Arrest Rates",
        sql: "SELECT violation,
                     COUNT(*) AS total_stops,
                     SUM(is_arrested) AS total_arrests,
                     CAST(ROUND(100.0 * SUM(is_arrested) / COUNT(*), 2) AS DOUBLE PRECISION) AS arrest_rate_percentage
              FROM police_logs
              GROUP BY violation
              HAVING COUNT(*) > 0
              ORDER BY arrest_rate_percentage DESC
              LIMIT 5",
    },
];

/// Returns the entries of `tier` in menu order.
#[must_use]
pub const fn entries(tier: CatalogTier) -> &'static [CatalogEntry] {
    match tier {
        CatalogTier::Advanced => ADVANCED,
        CatalogTier::Complex => COMPLEX,
    }
}

/// Returns the menu labels of `tier` in display order.
#[must_use]
pub fn labels(tier: CatalogTier) -> Vec<&'static str> {
    entries(tier).iter().map(|e| e.label).collect()
}

/// Looks up the statement for a menu label.
///
/// Labels must match exactly; there is no fuzzy matching.
#[must_use]
pub fn lookup(tier: CatalogTier, label: &str) -> Option<&'static str> {
    entries(tier)
        .iter()
        .find(|e| e.label == label)
        .map(|e| e.sql)
}

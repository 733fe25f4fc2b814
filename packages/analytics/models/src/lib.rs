#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Metrics, catalog and prediction types for traffic-stop analytics.
//!
//! Defines the summary counts shown at the top of the dashboard, the two
//! tiers of canned catalog queries, and the candidate/prediction pair used
//! by the frequency-mode outcome lookup.

use chrono::{NaiveDate, NaiveTime};
use securecheck_stop_models::{
    DriverGender, MAX_DRIVER_AGE, MIN_DRIVER_AGE, StopFlag, StopRecord,
};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Outcome predicted when no historical stop matches the candidate.
pub const FALLBACK_OUTCOME: &str = "Warning";

/// Violation predicted when no historical stop matches the candidate.
pub const FALLBACK_VIOLATION: &str = "Speeding";

/// Headline counts over the full stop table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    /// Number of stops.
    pub total: u64,
    /// Stops whose outcome mentions an arrest.
    pub arrests: u64,
    /// Stops whose outcome mentions a warning.
    pub warnings: u64,
    /// Stops flagged as drug related.
    pub drug_related: u64,
}

impl MetricsSummary {
    /// Returns the labelled metric tiles in display order.
    #[must_use]
    pub fn tiles(&self) -> Vec<MetricTile> {
        vec![
            MetricTile::new("Total Police Stops", self.total),
            MetricTile::new("Total Arrests", self.arrests),
            MetricTile::new("Total Warnings", self.warnings),
            MetricTile::new("Drug Related Stops", self.drug_related),
        ]
    }
}

/// One labelled metric for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTile {
    /// Display label.
    pub label: String,
    /// Metric value.
    pub value: u64,
}

impl MetricTile {
    fn new(label: &str, value: u64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// The two menus of canned analytical queries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CatalogTier {
    /// Single-table aggregations.
    Advanced,
    /// Window functions, subqueries and self-joins.
    Complex,
}

impl CatalogTier {
    /// Section heading for this tier's menu.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Advanced => "Advanced Insights",
            Self::Complex => "Complex Insights",
        }
    }

    /// Returns all tiers in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Advanced, Self::Complex]
    }
}

/// A menu label paired with the statement it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Question shown in the menu.
    pub label: &'static str,
    /// Self-contained SQL statement.
    pub sql: &'static str,
}

/// A stop entered through the prediction form.
///
/// Held in memory only; it is never written to the store. Field names match
/// the `police_logs` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStop {
    /// Date of the stop.
    pub stop_date: NaiveDate,
    /// Time of day of the stop.
    pub stop_time: NaiveTime,
    /// Country where the stop happened.
    #[serde(default)]
    pub country_name: String,
    /// Driver gender.
    pub driver_gender: DriverGender,
    /// Driver age in years.
    pub driver_age: u8,
    /// Driver race.
    #[serde(default)]
    pub driver_race: String,
    /// Whether a search was conducted.
    pub search_conducted: StopFlag,
    /// Kind of search.
    #[serde(default)]
    pub search_type: String,
    /// Categorical stop duration.
    pub stop_duration: String,
    /// Whether the stop was drug related.
    pub drugs_related_stop: StopFlag,
    /// Vehicle registration number.
    #[serde(default)]
    pub vehicle_number: String,
}

impl CandidateStop {
    /// Checks the form's range constraints.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAgeError`] if the driver age is outside
    /// [`MIN_DRIVER_AGE`]..=[`MAX_DRIVER_AGE`].
    pub const fn validate(&self) -> Result<(), InvalidAgeError> {
        if self.driver_age < MIN_DRIVER_AGE || self.driver_age > MAX_DRIVER_AGE {
            return Err(InvalidAgeError {
                age: self.driver_age,
            });
        }
        Ok(())
    }

    /// Returns `true` if `record` agrees with this candidate on gender, age,
    /// search flag, stop duration and drug flag. All comparisons are exact.
    #[must_use]
    pub fn matches(&self, record: &StopRecord) -> bool {
        record.driver_gender.as_deref() == Some(self.driver_gender.as_ref())
            && record.driver_age == Some(i64::from(self.driver_age))
            && record.search_conducted == Some(self.search_conducted.stored())
            && record.stop_duration.as_deref() == Some(self.stop_duration.as_str())
            && record.drugs_related_stop == Some(self.drugs_related_stop.stored())
    }
}

/// Error returned when a candidate's driver age is outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid driver age {age}: expected {min}-{max}", min = MIN_DRIVER_AGE, max = MAX_DRIVER_AGE)]
pub struct InvalidAgeError {
    /// The rejected age.
    pub age: u8,
}

/// Most likely outcome and violation for a candidate stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Predicted stop outcome.
    pub outcome: String,
    /// Predicted violation.
    pub violation: String,
}

impl Prediction {
    /// The prediction used when nothing matches.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            outcome: FALLBACK_OUTCOME.to_string(),
            violation: FALLBACK_VIOLATION.to_string(),
        }
    }
}

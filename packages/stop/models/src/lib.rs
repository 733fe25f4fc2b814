#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Traffic-stop record types and categorical field definitions.
//!
//! A [`StopRecord`] mirrors one row of the `police_logs` table. Stored rows
//! are never validated, so every column is optional and categorical columns
//! keep their raw text. The strongly typed enums ([`DriverGender`],
//! [`StopFlag`]) describe the values an operator can enter through the
//! prediction form.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Name of the table holding stop records.
pub const STOP_TABLE: &str = "police_logs";

/// Minimum driver age accepted by the prediction form.
pub const MIN_DRIVER_AGE: u8 = 16;

/// Maximum driver age accepted by the prediction form.
pub const MAX_DRIVER_AGE: u8 = 100;

/// Driver age pre-filled in the prediction form.
pub const DEFAULT_DRIVER_AGE: u8 = 27;

/// Gender of the stopped driver as entered in the form.
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
pub enum DriverGender {
    /// Stored as `Male`.
    Male,
    /// Stored as `Female`.
    Female,
}

impl DriverGender {
    /// Returns all variants in form display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Male, Self::Female]
    }
}

/// A two-valued column stored as integer `0`/`1`.
///
/// Used for `search_conducted` and `drugs_related_stop`. The form submits
/// the values as the strings `"0"` and `"1"`.
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
pub enum StopFlag {
    /// Stored as `0`.
    #[serde(rename = "0")]
    #[strum(serialize = "0")]
    No,
    /// Stored as `1`.
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    Yes,
}

impl StopFlag {
    /// Returns the integer representation used in the store.
    #[must_use]
    pub const fn stored(self) -> i64 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
        }
    }

    /// Returns `true` for [`StopFlag::Yes`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Returns all variants in form display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::No, Self::Yes]
    }
}

/// One logged traffic stop, as read from `police_logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    /// Date of the stop.
    pub stop_date: Option<NaiveDate>,
    /// Time of day of the stop.
    pub stop_time: Option<NaiveTime>,
    /// Country where the stop happened.
    pub country_name: Option<String>,
    /// Driver gender text (`Male`/`Female` for well-formed rows).
    pub driver_gender: Option<String>,
    /// Driver age in years.
    pub driver_age: Option<i64>,
    /// Driver race.
    pub driver_race: Option<String>,
    /// `1` when a search was conducted, `0` otherwise.
    pub search_conducted: Option<i64>,
    /// Kind of search, if one was conducted.
    pub search_type: Option<String>,
    /// Categorical stop duration (e.g. `0-15 Min`).
    pub stop_duration: Option<String>,
    /// `1` when the stop was drug related, `0` otherwise.
    pub drugs_related_stop: Option<i64>,
    /// Vehicle registration number.
    pub vehicle_number: Option<String>,
    /// Outcome of the stop (e.g. `Arrest`, `Warning`, `Citation`).
    pub stop_outcome: Option<String>,
    /// Violation cited for the stop.
    pub violation: Option<String>,
}

impl StopRecord {
    /// Returns `true` if the outcome contains `needle`, ignoring case.
    ///
    /// Rows without an outcome never match.
    #[must_use]
    pub fn outcome_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.stop_outcome
            .as_deref()
            .is_some_and(|outcome| outcome.to_lowercase().contains(&needle))
    }

    /// Returns `true` if `drugs_related_stop` is exactly `1`.
    #[must_use]
    pub fn is_drug_related(&self) -> bool {
        self.drugs_related_stop == Some(StopFlag::Yes.stored())
    }
}

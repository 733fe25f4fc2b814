//! Frequency-mode outcome and violation lookup.
//!
//! Not a trained model: the prediction is simply the most common historical
//! outcome and violation among stops that agree with the candidate on
//! gender, age, search flag, stop duration and drug flag.

use std::collections::BTreeMap;

use securecheck_analytics_models::{
    CandidateStop, FALLBACK_OUTCOME, FALLBACK_VIOLATION, Prediction,
};
use securecheck_stop_models::StopRecord;

/// Predicts the outcome and violation for `candidate`.
///
/// The two fields are computed independently over the matching rows, so
/// they need not come from the same stop. When no row matches, the result
/// is `Warning` / `Speeding`. A field whose matched values are all missing
/// also takes its fallback.
#[must_use]
pub fn predict(records: &[StopRecord], candidate: &CandidateStop) -> Prediction {
    let matches: Vec<&StopRecord> = records.iter().filter(|r| candidate.matches(r)).collect();

    if matches.is_empty() {
        log::debug!("No historical stops match the candidate; using fallback prediction");
        return Prediction::fallback();
    }

    let outcome = mode(matches.iter().filter_map(|r| r.stop_outcome.as_deref()));
    let violation = mode(matches.iter().filter_map(|r| r.violation.as_deref()));

    log::debug!(
        "Predicted from {} matching stops: outcome={outcome:?} violation={violation:?}",
        matches.len()
    );

    Prediction {
        outcome: outcome.unwrap_or(FALLBACK_OUTCOME).to_string(),
        violation: violation.unwrap_or(FALLBACK_VIOLATION).to_string(),
    }
}

/// Returns the most frequent value.
///
/// Ties go to the lexicographically smallest value (byte order), so the
/// result does not depend on row order. Returns `None` for no values.
#[must_use]
pub fn mode<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // BTreeMap iterates in ascending key order, and only a strictly larger
    // count replaces the current best.
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Distinct non-null stop durations in first-seen order.
///
/// These are the only options the form offers for the stop duration.
#[must_use]
pub fn distinct_stop_durations(records: &[StopRecord]) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    records
        .iter()
        .filter_map(|r| r.stop_duration.as_deref())
        .filter(|d| seen.insert(*d))
        .map(ToString::to_string)
        .collect()
}

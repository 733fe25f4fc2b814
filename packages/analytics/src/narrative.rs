//! Plain-language prediction summary.

use securecheck_analytics_models::{CandidateStop, Prediction};

/// Describes the entered stop and its prediction in a short paragraph.
#[must_use]
pub fn narrate(stop: &CandidateStop, prediction: &Prediction) -> String {
    let search_text = if stop.search_conducted.is_set() {
        "A search was conducted"
    } else {
        "No search was conducted"
    };
    let drug_text = if stop.drugs_related_stop.is_set() {
        "was drug related"
    } else {
        "was not drug related"
    };
    let country = if stop.country_name.trim().is_empty() {
        "an unspecified country"
    } else {
        stop.country_name.trim()
    };

    format!(
        "Predicted Violation: {violation}. Predicted Stop Outcome: {outcome}. \
         A {age}-year-old {gender} driver from {country} was stopped at {time} on {date}. \
         {search_text}, and the stop {drug_text}. \
         Stop duration: {duration}. Vehicle Number: {vehicle}.",
        violation = prediction.violation,
        outcome = prediction.outcome,
        age = stop.driver_age,
        gender = stop.driver_gender,
        time = stop.stop_time.format("%H:%M:%S"),
        date = stop.stop_date.format("%Y-%m-%d"),
        duration = stop.stop_duration,
        vehicle = stop.vehicle_number,
    )
}

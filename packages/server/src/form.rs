//! Descriptor for the stop-prediction form.

use securecheck_server_models::{FieldKind, FormDescriptor, FormField};
use securecheck_stop_models::{
    DEFAULT_DRIVER_AGE, DriverGender, MAX_DRIVER_AGE, MIN_DRIVER_AGE, StopFlag,
};

/// Builds the form. `stop_durations` are the duration options observed in
/// the stop table.
#[must_use]
pub fn descriptor(stop_durations: Vec<String>) -> FormDescriptor {
    let flags = || StopFlag::all().iter().map(ToString::to_string).collect();

    FormDescriptor {
        title: "Add New Police Log & Predict Outcome and Violation".to_string(),
        submit_label: "Predict Stop Outcome & Violation".to_string(),
        fields: vec![
            field("stop_date", "Stop Date", FieldKind::Date),
            field("stop_time", "Stop Time", FieldKind::Time),
            field("country_name", "Country Name", FieldKind::Text),
            field(
                "driver_gender",
                "Driver Gender",
                FieldKind::Select {
                    options: DriverGender::all().iter().map(ToString::to_string).collect(),
                },
            ),
            field(
                "driver_age",
                "Driver Age",
                FieldKind::Integer {
                    min: MIN_DRIVER_AGE,
                    max: MAX_DRIVER_AGE,
                    default: DEFAULT_DRIVER_AGE,
                },
            ),
            field("driver_race", "Driver Race", FieldKind::Text),
            field(
                "search_conducted",
                "Was a Search Conducted?",
                FieldKind::Select { options: flags() },
            ),
            field("search_type", "Search Type", FieldKind::Text),
            field(
                "stop_duration",
                "Stop Duration",
                FieldKind::Select {
                    options: stop_durations,
                },
            ),
            field(
                "drugs_related_stop",
                "Was it Drug Related?",
                FieldKind::Select { options: flags() },
            ),
            field("vehicle_number", "Vehicle Number", FieldKind::Text),
        ],
    }
}

fn field(name: &str, label: &str, kind: FieldKind) -> FormField {
    FormField {
        name: name.to_string(),
        label: label.to_string(),
        kind,
    }
}

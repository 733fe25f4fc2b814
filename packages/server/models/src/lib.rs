#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the SecureCheck server.
//!
//! These types are serialized to JSON for the presentation layer. They are
//! separate from the analytics and table types to allow independent
//! evolution of the API contract.

use securecheck_analytics_models::{CatalogTier, MetricTile, MetricsSummary, Prediction};
use securecheck_database_models::Table;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Severity of an operator-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Something failed (e.g. the database was unreachable).
    Error,
    /// Nothing failed but there is nothing to show.
    Warning,
}

/// A message the presentation layer should show to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Input widget for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Calendar date (`YYYY-MM-DD`).
    Date,
    /// Time of day (`HH:MM:SS`).
    Time,
    /// Free text.
    Text,
    /// Bounded integer input.
    Integer {
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
        /// Pre-filled value.
        default: u8,
    },
    /// Choice from a fixed list.
    Select {
        /// Options in display order.
        options: Vec<String>,
    },
}

/// One field of the prediction form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Submission key (matches the `police_logs` column).
    pub name: String,
    /// Display label.
    pub label: String,
    /// Input widget.
    pub kind: FieldKind,
}

/// The prediction form as the presentation layer should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDescriptor {
    /// Section heading.
    pub title: String,
    /// Submit button label.
    pub submit_label: String,
    /// Fields in display order.
    pub fields: Vec<FormField>,
}

impl FormDescriptor {
    /// Finds a field by submission key.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One catalog menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCatalogMenu {
    /// Which catalog this is.
    pub tier: CatalogTier,
    /// Section heading.
    pub title: String,
    /// Menu labels in display order.
    pub labels: Vec<String>,
}

/// Body of a catalog run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryRequest {
    /// Exact menu label to run.
    pub label: String,
}

/// Result of running a catalog query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQueryResult {
    /// Catalog the query came from.
    pub tier: CatalogTier,
    /// Menu label that was run.
    pub label: String,
    /// Result rows; `None` when the query returned nothing.
    pub table: Option<Table>,
    /// Operator notices raised while running the query.
    pub notices: Vec<Notice>,
}

/// The full stop table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLogs {
    /// Every row of `police_logs`.
    pub table: Table,
    /// Operator notices raised while fetching.
    pub notices: Vec<Notice>,
}

/// Headline metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMetrics {
    /// Raw counts.
    pub summary: MetricsSummary,
    /// Labelled tiles in display order.
    pub tiles: Vec<MetricTile>,
    /// Operator notices raised while fetching.
    pub notices: Vec<Notice>,
}

/// The prediction form with data-driven options filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiForm {
    /// Form descriptor.
    pub form: FormDescriptor,
    /// Operator notices raised while fetching options.
    pub notices: Vec<Notice>,
}

/// Prediction for a submitted stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPrediction {
    /// Predicted outcome and violation.
    pub prediction: Prediction,
    /// Plain-language summary.
    pub narrative: String,
    /// Operator notices raised while fetching history.
    pub notices: Vec<Notice>,
}

/// Everything needed to render the dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDashboard {
    /// Page title.
    pub title: String,
    /// Page subtitle.
    pub subtitle: String,
    /// Every row of `police_logs`.
    pub logs: Table,
    /// Headline metric tiles.
    pub metrics: Vec<MetricTile>,
    /// Catalog menus in display order.
    pub menus: Vec<ApiCatalogMenu>,
    /// Prediction form.
    pub form: FormDescriptor,
    /// Operator notices raised while building the page.
    pub notices: Vec<Notice>,
}

/// Error body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// What went wrong.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_is_tagged() {
        let kind = FieldKind::Integer {
            min: 16,
            max: 100,
            default: 27,
        };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "integer", "min": 16, "max": 100, "default": 27 })
        );
    }

    #[test]
    fn notices_serialize_level_in_snake_case() {
        let json = serde_json::to_value(Notice::warning("nothing here")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "level": "warning", "message": "nothing here" })
        );
    }
}

//! Headline counts over the full stop table.

use securecheck_analytics_models::MetricsSummary;
use securecheck_stop_models::StopRecord;

/// Counts total stops, arrests, warnings and drug-related stops.
///
/// Arrests and warnings match the outcome text case-insensitively as a
/// substring; rows without an outcome count toward neither. Drug-related
/// stops require `drugs_related_stop` to be exactly `1`.
#[must_use]
pub fn summarize(records: &[StopRecord]) -> MetricsSummary {
    let count = |pred: &dyn Fn(&StopRecord) -> bool| -> u64 {
        records.iter().filter(|r| pred(r)).count() as u64
    };

    MetricsSummary {
        total: records.len() as u64,
        arrests: count(&|r| r.outcome_contains("arrest")),
        warnings: count(&|r| r.outcome_contains("warning")),
        drug_related: count(&StopRecord::is_drug_related),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(outcome: Option<&str>, drugs: Option<i64>) -> StopRecord {
        StopRecord {
            stop_outcome: outcome.map(ToString::to_string),
            drugs_related_stop: drugs,
            ..StopRecord::default()
        }
    }

    #[test]
    fn empty_table_is_all_zeros() {
        assert_eq!(summarize(&[]), MetricsSummary::default());
    }

    #[test]
    fn counts_each_metric() {
        let records = vec![
            stop(Some("Arrest"), Some(1)),
            stop(Some("ARREST MADE"), Some(0)),
            stop(Some("Warning"), Some(1)),
            stop(Some("Written warning"), None),
            stop(Some("Citation"), Some(0)),
            stop(None, Some(1)),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.arrests, 2);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.drug_related, 3);
    }

    #[test]
    fn drug_flag_needs_exact_one() {
        let records = vec![stop(None, Some(2)), stop(None, Some(-1)), stop(None, Some(1))];
        assert_eq!(summarize(&records).drug_related, 1);
    }

    #[test]
    fn counts_never_exceed_total() {
        let records: Vec<StopRecord> = (0..25)
            .map(|i| {
                let outcome = match i % 4 {
                    0 => Some("Arrest"),
                    1 => Some("Warning"),
                    2 => None,
                    _ => Some("Arrest / Warning"),
                };
                stop(outcome, Some(i % 3))
            })
            .collect();

        let summary = summarize(&records);
        assert_eq!(summary.total, 25);
        assert!(summary.arrests <= summary.total);
        assert!(summary.warnings <= summary.total);
        assert!(summary.drug_related <= summary.total);
    }
}

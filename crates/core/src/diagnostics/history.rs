//! Per-vehicle fault history summary.
//!
//! Repeated analysis of the same code on the same vehicle produces separate
//! records. This module folds those records into counts so recurring faults
//! stand out on the vehicle's history tab.

use std::collections::BTreeMap;

use serde::Serialize;

/// A code must be diagnosed at least this many times to count as recurring.
pub const RECURRING_THRESHOLD: usize = 2;

/// A code seen repeatedly on one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringCode {
    pub code: String,
    pub occurrences: usize,
    pub unresolved: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultHistorySummary {
    pub total: usize,
    pub unresolved: usize,
    /// Most frequent first, ties broken by code.
    pub recurring_codes: Vec<RecurringCode>,
}

/// Summarize `(code, resolved)` pairs for one vehicle.
pub fn summarize_history<'a, I>(entries: I) -> FaultHistorySummary
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    let mut total = 0;
    let mut unresolved = 0;
    let mut per_code: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for (code, resolved) in entries {
        total += 1;
        let slot = per_code.entry(code).or_default();
        slot.0 += 1;
        if !resolved {
            unresolved += 1;
            slot.1 += 1;
        }
    }

    let mut recurring_codes: Vec<RecurringCode> = per_code
        .into_iter()
        .filter(|(_, (occurrences, _))| *occurrences >= RECURRING_THRESHOLD)
        .map(|(code, (occurrences, unresolved))| RecurringCode {
            code: code.to_string(),
            occurrences,
            unresolved,
        })
        .collect();
    recurring_codes.sort_by(|a, b| {
        b.occurrences
            .cmp(&a.occurrences)
            .then_with(|| a.code.cmp(&b.code))
    });

    FaultHistorySummary {
        total,
        unresolved,
        recurring_codes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history() {
        let summary = summarize_history(Vec::<(&str, bool)>::new());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.unresolved, 0);
        assert!(summary.recurring_codes.is_empty());
    }

    #[test]
    fn single_occurrence_is_not_recurring() {
        let summary = summarize_history(vec![("P0171", false), ("P0300", true)]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.unresolved, 1);
        assert!(summary.recurring_codes.is_empty());
    }

    #[test]
    fn recurring_codes_sorted_by_frequency_then_code() {
        let summary = summarize_history(vec![
            ("P0300", false),
            ("P0171", true),
            ("P0300", true),
            ("P0171", false),
            ("P0300", false),
            ("P0420", false),
        ]);

        assert_eq!(summary.total, 6);
        assert_eq!(summary.unresolved, 4);
        assert_eq!(
            summary.recurring_codes,
            vec![
                RecurringCode {
                    code: "P0300".into(),
                    occurrences: 3,
                    unresolved: 2,
                },
                RecurringCode {
                    code: "P0171".into(),
                    occurrences: 2,
                    unresolved: 1,
                },
            ]
        );
    }
}

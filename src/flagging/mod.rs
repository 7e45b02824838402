//! Reference range interpretation and flagging.
//!
//! `(value, raw range, sex)` flows through sex-segment selection on the raw
//! text, normalization of the selected segment, then classification. The
//! resulting `Flag` feeds both the entry-page indicator and the report-page
//! emphasis, so the two can never disagree.
//!
//! Fail-open: anything unparsable yields `Flag::None` (no flag shown). Nothing
//! here errors, blocks, or keeps state between calls.

pub mod classify;
pub mod gender;
pub mod normalize;
pub mod presentation;
pub mod types;

pub use classify::{classify, parse_range, RangeClassifier};
pub use gender::extract_segment;
pub use normalize::normalize_range;
pub use presentation::{emphasize, entry_indicator, report_cell, ReportCell};
pub use types::{FlagError, RangeShape};

use std::sync::LazyLock;

use crate::config::FlaggingConfig;
use crate::models::{Flag, FlaggedResult, LabResultEntry, Sex};

static DEFAULT_EVALUATOR: LazyLock<RangeEvaluator> = LazyLock::new(RangeEvaluator::default);

/// Runs the full pipeline with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct RangeEvaluator {
    classifier: RangeClassifier,
}

impl RangeEvaluator {
    pub fn new(config: &FlaggingConfig) -> Self {
        Self {
            classifier: RangeClassifier::new(config),
        }
    }

    /// Flag one result against its raw reference range.
    pub fn evaluate(&self, value: &str, raw_range: &str, sex: Option<&str>) -> Flag {
        let sex = sex.and_then(Sex::from_label);
        let segment = normalize_range(extract_segment(raw_range, sex));
        let flag = self.classifier.classify(value, &segment);

        if flag == Flag::None {
            tracing::trace!(
                segment = %segment,
                sex = sex.map(|s| s.as_str()),
                "Result not evaluable against range"
            );
        }

        flag
    }

    /// Evaluate every row of a finalized report.
    pub fn evaluate_report(&self, entries: &[LabResultEntry], sex: Option<&str>) -> Vec<FlaggedResult> {
        let results: Vec<FlaggedResult> = entries
            .iter()
            .map(|entry| {
                let flag = self.evaluate(&entry.value, &entry.reference_range, sex);
                FlaggedResult {
                    entry: entry.clone(),
                    flag,
                    indicator: entry_indicator(flag),
                    emphasize: emphasize(flag),
                }
            })
            .collect();

        tracing::debug!(
            rows = results.len(),
            abnormal = results.iter().filter(|r| r.emphasize).count(),
            "Evaluated report"
        );

        results
    }
}

/// Flag one result with the default configuration.
pub fn evaluate(value: &str, raw_range: &str, sex: Option<&str>) -> Flag {
    DEFAULT_EVALUATOR.evaluate(value, raw_range, sex)
}

/// Evaluate a report with the default configuration.
pub fn evaluate_report(entries: &[LabResultEntry], sex: Option<&str>) -> Vec<FlaggedResult> {
    DEFAULT_EVALUATOR.evaluate_report(entries, sex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryIndicator;

    fn entry(test_name: &str, value: &str, range: &str) -> LabResultEntry {
        LabResultEntry {
            test_name: test_name.into(),
            value: value.into(),
            unit: None,
            reference_range: range.into(),
        }
    }

    // ── sex-scoped ranges ──────────────────────────────────────

    #[test]
    fn normalized_female_segment_is_bounded() {
        let segment = extract_segment(
            &normalize_range("Male: 13-17, Female: 12-15"),
            Some(Sex::Female),
        )
        .to_string();
        assert_eq!(classify("13", &segment), Flag::Normal);
        assert_eq!(parse_range(&segment), Some(RangeShape::Bounded { min: 12.0, max: 15.0 }));
    }

    #[test]
    fn female_hemoglobin_uses_female_bounds() {
        let range = "Male: 13-17, Female: 12-15";
        assert_eq!(evaluate("13", range, Some("Female")), Flag::Normal);
        assert_eq!(evaluate("16", range, Some("Female")), Flag::High);
        assert_eq!(evaluate("12.5", range, Some("Male")), Flag::Low);
    }

    #[test]
    fn missing_sex_falls_back_to_unsplit_range() {
        let range = "Male: 13-17, Female: 12-15";
        // first bounded pair in the full text wins
        assert_eq!(evaluate("12.5", range, None), Flag::Low);
        assert_eq!(evaluate("15", range, Some("unknown")), Flag::Normal);
    }

    #[test]
    fn sex_scoped_with_unicode_dash_and_units() {
        let range = "Male: 0.7\u{2013}1.3 mg/dL, Female: 0.6\u{2013}1.1 mg/dL";
        assert_eq!(evaluate("1.2", range, Some("female")), Flag::High);
        assert_eq!(evaluate("1.2", range, Some("male")), Flag::Normal);
    }

    #[test]
    fn sex_scoped_platelets_with_thousands() {
        let range = "Male: 150,000-400,000, Female: 170,000-450,000";
        assert_eq!(evaluate("420000", range, Some("Male")), Flag::High);
        assert_eq!(evaluate("420,000", range, Some("Female")), Flag::Normal);
    }

    // ── unscoped ───────────────────────────────────────────────

    #[test]
    fn glyph_ranges_evaluate() {
        assert_eq!(evaluate("150", "\u{2264}140 mg/dL", None), Flag::High);
        assert_eq!(evaluate("4", "\u{2265} 5", Some("Male")), Flag::Low);
    }

    #[test]
    fn qualitative_range_never_flags() {
        assert_eq!(evaluate("Positive", "Negative", Some("Female")), Flag::None);
        assert_eq!(evaluate("7", "Report-based", None), Flag::None);
    }

    #[test]
    fn empty_inputs_are_none() {
        assert_eq!(evaluate("", "", None), Flag::None);
        assert_eq!(evaluate("5", "", Some("Male")), Flag::None);
    }

    #[test]
    fn evaluator_honours_config() {
        let evaluator = RangeEvaluator::new(&FlaggingConfig {
            qualitative_keywords: vec!["nil".into()],
        });
        assert_eq!(evaluator.evaluate("3", "NIL", None), Flag::None);
        assert_eq!(evaluator.evaluate("3", "<2", None), Flag::High);
    }

    // ── report ─────────────────────────────────────────────────

    #[test]
    fn report_rows_share_one_flag_for_both_views() {
        let entries = vec![
            entry("Glucose", "120", "70-99"),
            entry("HIV", "Non-reactive", "Non-Reactive"),
            entry("Hemoglobin", "13", "Male: 13-17, Female: 12-15"),
            entry("Urea", "5", "7-20"),
        ];
        let results = evaluate_report(&entries, Some("Female"));

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].flag, Flag::High);
        assert_eq!(results[1].flag, Flag::None);
        assert_eq!(results[2].flag, Flag::Normal);
        assert_eq!(results[3].flag, Flag::Low);

        for r in &results {
            assert_eq!(r.indicator, entry_indicator(r.flag));
            assert_eq!(r.emphasize, emphasize(r.flag));
        }
        assert_eq!(results[3].indicator, EntryIndicator::Low);
        assert!(!results[2].emphasize);
        assert_eq!(results[0].entry.test_name, "Glucose");
    }

    #[test]
    fn empty_report_is_empty() {
        assert!(evaluate_report(&[], None).is_empty());
    }

    #[test]
    fn flagged_result_serializes() {
        let results = evaluate_report(&[entry("Glucose", "120", "70-99")], None);
        let json = serde_json::to_string(&results[0]).unwrap();
        assert!(json.contains("\"flag\":\"high\""));
        assert!(json.contains("\"emphasize\":true"));
    }
}

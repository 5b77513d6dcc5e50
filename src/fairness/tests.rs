use super::*;
use crate::constants::{DEFAULT_DIR, DEFAULT_EOD};
use crate::ranking::{CandidateRecord, RankedResultSet};

fn table(rows: &[(f32, GenderLabel)]) -> RankedResultSet {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, &(score, gender))| CandidateRecord {
            identifier: format!("candidate-{}.txt", i),
            relevance_score: score,
            inferred_gender: gender,
            experience_years: None,
            rank: i as u32 + 1,
        })
        .collect();
    RankedResultSet::new(records)
}

fn assert_sentinels(report: &FairnessReport) {
    assert_eq!(report.dir_baseline, DEFAULT_DIR);
    assert_eq!(report.dir_mitigated, DEFAULT_DIR);
    assert_eq!(report.eod, DEFAULT_EOD);
}

use crate::gender::GenderLabel::{Female, Male, Unknown};

#[test]
fn test_below_sample_minimum_is_degenerate() {
    let results = table(&[(0.9, Male), (0.8, Female)]);
    let report = FairnessAuditor::new().audit(&results);

    assert!(!report.is_computed());
    assert_sentinels(&report);
    assert!(report.error.as_deref().unwrap().contains("not enough valid samples"));
}

#[test]
fn test_single_gender_is_insufficient_diversity() {
    let rows: Vec<(f32, GenderLabel)> = (0..6).map(|i| (0.5 + i as f32 * 0.05, Female)).collect();
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(!report.is_computed());
    assert_sentinels(&report);
    assert!(report.error.as_deref().unwrap().contains("diversity"));
}

#[test]
fn test_all_below_threshold_is_zero_favorable() {
    let rows = [
        (0.40, Male),
        (0.35, Male),
        (0.30, Male),
        (0.25, Male),
        (0.45, Male),
        (0.42, Female),
        (0.38, Female),
        (0.33, Female),
        (0.20, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(!report.is_computed());
    assert_sentinels(&report);
    assert!(report.error.as_deref().unwrap().contains("favorable threshold"));
}

#[test]
fn test_parity_fixture_dir_is_exactly_one() {
    // 4 Male and 4 Female, each group with favorable rate 2/4 at the 0.50
    // threshold: the ratio formula and the polarity convention must give
    // exactly 1.0.
    let rows = [
        (0.90, Male),
        (0.85, Male),
        (0.30, Male),
        (0.20, Male),
        (0.60, Female),
        (0.55, Female),
        (0.10, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(report.is_computed());
    assert_eq!(report.dir_baseline, 1.0);
    assert_eq!(report.dir_mitigated, 1.0);
    assert_eq!(report.eod, 0.0);
}

#[test]
fn test_dir_polarity_unprivileged_over_privileged() {
    // Male favorable 3/4, Female favorable 1/4: DIR = 0.25 / 0.75.
    let rows = [
        (0.90, Male),
        (0.80, Male),
        (0.70, Male),
        (0.20, Male),
        (0.60, Female),
        (0.40, Female),
        (0.30, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(report.is_computed());
    assert!((report.dir_baseline - (0.25 / 0.75)).abs() < 1e-12);
    assert!(report.dir_baseline < 0.8, "fixture should violate the four-fifths rule");
}

#[test]
fn test_dir_above_one_denotes_reverse_disparity() {
    let rows = [
        (0.60, Male),
        (0.30, Male),
        (0.20, Male),
        (0.90, Female),
        (0.80, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    // Female rate 2/3 over male rate 1/3.
    assert!(report.is_computed());
    assert!((report.dir_baseline - 2.0).abs() < 1e-12);
}

#[test]
fn test_privileged_zero_rate_substitutes_sentinel() {
    // Favorable outcomes exist, but all in the unprivileged group: the
    // ratio has a zero denominator and must fall back to the sentinel
    // instead of propagating inf.
    let rows = [
        (0.40, Male),
        (0.30, Male),
        (0.20, Male),
        (0.90, Female),
        (0.85, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(report.is_computed());
    assert_eq!(report.dir_baseline, DEFAULT_DIR);
    // At the mitigated threshold (0.45) the male group is still shut out.
    assert_eq!(report.dir_mitigated, DEFAULT_DIR);
    // Male group has no ground-truth-favorable records, so TPR is
    // undefined there and EOD reports its sentinel.
    assert_eq!(report.eod, DEFAULT_EOD);
}

#[test]
fn test_mitigated_threshold_changes_ratio() {
    // 0.47 crosses favorable only at the mitigated threshold, shifting the
    // female rate from 1/3 to 2/3 between the two passes.
    let rows = [
        (0.90, Male),
        (0.60, Male),
        (0.55, Male),
        (0.90, Female),
        (0.47, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(report.is_computed());
    assert!((report.dir_baseline - (1.0 / 3.0)).abs() < 1e-12);
    assert!((report.dir_mitigated - (2.0 / 3.0)).abs() < 1e-12);
}

#[test]
fn test_unknown_records_are_excluded() {
    // Ten records, but only four with a known gender: below the minimum.
    let rows = [
        (0.90, Unknown),
        (0.85, Unknown),
        (0.80, Unknown),
        (0.75, Unknown),
        (0.70, Unknown),
        (0.65, Unknown),
        (0.90, Male),
        (0.85, Male),
        (0.60, Female),
        (0.55, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(!report.is_computed());
    assert!(report.error.as_deref().unwrap().contains("4 known-gender records"));
}

#[test]
fn test_unknown_does_not_count_toward_favorable() {
    // Unknown rows above threshold must not rescue a zero-favorable batch.
    let rows = [
        (0.90, Unknown),
        (0.40, Male),
        (0.35, Male),
        (0.30, Male),
        (0.25, Female),
        (0.20, Female),
        (0.15, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(!report.is_computed());
    assert!(report.error.as_deref().unwrap().contains("favorable threshold"));
}

#[test]
fn test_threshold_is_inclusive() {
    // A score of exactly 0.50 counts as favorable.
    let rows = [
        (0.50, Male),
        (0.10, Male),
        (0.50, Female),
        (0.10, Female),
        (0.10, Female),
    ];
    let report = FairnessAuditor::new().audit(&table(&rows));

    assert!(report.is_computed());
    // Male rate 1/2, female rate 1/3.
    assert!((report.dir_baseline - (1.0 / 3.0) / (1.0 / 2.0)).abs() < 1e-12);
}

#[test]
fn test_audit_is_deterministic() {
    let rows = [
        (0.90, Male),
        (0.85, Male),
        (0.30, Male),
        (0.60, Female),
        (0.55, Female),
        (0.10, Female),
    ];
    let results = table(&rows);
    let auditor = FairnessAuditor::new();
    assert_eq!(auditor.audit(&results), auditor.audit(&results));
}

#[test]
fn test_degenerate_report_shape() {
    let report = FairnessReport::degenerate(&AuditError::InsufficientDiversity);
    assert!(!report.is_computed());
    assert_sentinels(&report);

    let computed = FairnessReport::computed(0.8, 0.9, -0.1);
    assert!(computed.is_computed());
    assert!(computed.error.is_none());
}

#[test]
fn test_report_serde_omits_absent_error() {
    let computed = FairnessReport::computed(1.0, 1.0, 0.0);
    let json = serde_json::to_string(&computed).unwrap();
    assert!(!json.contains("error"));

    let degenerate = FairnessReport::degenerate(&AuditError::InsufficientDiversity);
    let json = serde_json::to_string(&degenerate).unwrap();
    assert!(json.contains("error"));

    let back: FairnessReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, degenerate);
}

mod eod_formula {
    use super::super::{AuditRecord, FairnessAuditor};

    fn population(rows: &[(f32, bool)]) -> Vec<AuditRecord> {
        rows.iter()
            .map(|&(score, privileged)| AuditRecord { score, privileged })
            .collect()
    }

    #[test]
    fn test_identical_label_sets_give_zero() {
        let auditor = FairnessAuditor::new();
        let pop = population(&[(0.9, true), (0.2, true), (0.8, false), (0.1, false)]);
        assert_eq!(auditor.equal_opportunity_difference(&pop, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_diverging_thresholds_expose_tpr_gap() {
        // Ground truth at 0.5; predictions at 0.7. Privileged true
        // positives: 0.9 of {0.9, 0.6} -> TPR 0.5. Unprivileged: 0.8 of
        // {0.8} -> TPR 1.0. EOD = 1.0 - 0.5.
        let auditor = FairnessAuditor::new();
        let pop = population(&[
            (0.9, true),
            (0.6, true),
            (0.8, false),
            (0.2, false),
        ]);
        let eod = auditor.equal_opportunity_difference(&pop, 0.7, 0.5);
        assert!((eod - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_missing_group_positives_give_sentinel() {
        // No unprivileged record clears the ground-truth threshold.
        let auditor = FairnessAuditor::new();
        let pop = population(&[(0.9, true), (0.8, true), (0.2, false), (0.1, false)]);
        assert_eq!(auditor.equal_opportunity_difference(&pop, 0.5, 0.5), 0.0);
    }
}

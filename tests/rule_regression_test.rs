// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Regression tests pinning the counts against the closed-form rule.

use cevian_count::geometry::constants::RULE_VERIFIED_MAX_N;
use cevian_count::{a_rule, verify_rule, InvariantEngine, Sweep, SweepRow};

#[test]
fn test_count_matches_rule_through_200() {
    let engine = InvariantEngine::default();
    for n in 1..=RULE_VERIFIED_MAX_N {
        assert_eq!(engine.count(n), a_rule(n), "d_angle({}) differs from rule", n);
    }
}

#[test]
fn test_verify_rule_reports_no_mismatch() {
    let report = verify_rule(RULE_VERIFIED_MAX_N, &InvariantEngine::default());
    assert!(report.is_ok(), "mismatches: {:?}", report.mismatches);
}

#[test]
fn test_verify_rule_collects_every_mismatch() {
    // With zero tolerance only bit-exact products survive, so many odd n fall short of the rule.
    let report = verify_rule(40, &InvariantEngine::new(0.0));
    assert!(!report.is_ok());
    assert_eq!(report.max_n, 40);
    assert_eq!(
        report.mismatches[..2],
        [
            SweepRow {
                n: 5,
                count: 1,
                rule: 13,
            },
            SweepRow {
                n: 7,
                count: 7,
                rule: 19,
            },
        ]
    );

    let ns: Vec<usize> = report.mismatches.iter().map(|row| row.n).collect();
    assert!(ns.windows(2).all(|pair| pair[0] < pair[1]), "not ascending: {:?}", ns);

    // Every n in range that differs is reported, and nothing else.
    let engine = InvariantEngine::new(0.0);
    let expected: Vec<usize> = (1..=40).filter(|&n| engine.count(n) != a_rule(n)).collect();
    assert_eq!(ns, expected);
    for row in &report.mismatches {
        assert!(!row.matches());
        assert_eq!(row.rule, a_rule(row.n));
        assert!(row.count < row.rule, "n = {}", row.n);
    }
}

#[test]
fn test_even_n_has_no_solutions() {
    // Independent of the rule: with n even there is no middle cevian, and no triple closes.
    let engine = InvariantEngine::default();
    for n in (2..=RULE_VERIFIED_MAX_N).step_by(2) {
        assert_eq!(engine.count(n), 0, "d_angle({}) should be 0", n);
    }
}

#[test]
fn test_rule_literals() {
    assert_eq!(a_rule(1), 1);
    assert_eq!(a_rule(9), 37);
    assert_eq!(a_rule(10), 0);
    assert_eq!(a_rule(19), 67);
}

#[test]
fn test_count_is_stable_across_tolerances() {
    let counts: Vec<usize> = [1e-9, 1e-12, 1e-15]
        .iter()
        .map(|&tol| InvariantEngine::new(tol).count(7))
        .collect();
    assert_eq!(counts, vec![19, 19, 19]);
}

#[test]
fn test_sweep_first_terms() {
    let sweep = Sweep::run(12, &InvariantEngine::default());
    assert_eq!(sweep.values(), vec![1, 0, 7, 0, 13, 0, 19, 0, 37, 0, 31, 0]);
    assert_eq!(sweep.mismatches().count(), 0);
}

//! Property-based tests for the evaluator.
//!
//! These tests use proptest to verify:
//! - certification is exactly the subset relation
//! - results do not depend on identifier order
//! - scoring is total and repeatable

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::evaluator::{
    compute_score, compute_score_with, is_certified, module_progress, module_progress_with,
    CertificationEvaluator, Rounding,
};
use crate::model::{CompletionRecord, RequiredModuleSet};

// ============================================================================
// Strategies
// ============================================================================

/// Short module ids drawn from a small alphabet so overlaps are common.
fn arb_module_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("M[0-9]{1,2}").unwrap()
}

/// Unique module ids in random order.
fn arb_required() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_module_id(), 0..8)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn arb_completed() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_module_id(), 0..12)
}

fn arb_rounding() -> impl Strategy<Value = Rounding> {
    prop_oneof![Just(Rounding::HalfAwayFromZero), Just(Rounding::HalfToEven)]
}

// ============================================================================
// Certification
// ============================================================================

proptest! {
    #[test]
    fn certified_iff_subset(required in arb_required(), completed in arb_completed()) {
        let required_set: BTreeSet<&String> = required.iter().collect();
        let completed_set: BTreeSet<&String> = completed.iter().collect();
        let expected = required_set.is_subset(&completed_set);

        let set = RequiredModuleSet::new(required.clone()).unwrap();
        let record: CompletionRecord = completed.iter().cloned().collect();
        prop_assert_eq!(is_certified(&set, &record), expected);
    }

    #[test]
    fn certification_ignores_order(
        required in arb_required(),
        completed in arb_completed(),
        seed in any::<u64>(),
    ) {
        let set = RequiredModuleSet::new(required.clone()).unwrap();
        let record: CompletionRecord = completed.iter().cloned().collect();

        let mut rotated_required = required.clone();
        let mut reversed_completed = completed.clone();
        if !rotated_required.is_empty() {
            let by = (seed as usize) % rotated_required.len();
            rotated_required.rotate_left(by);
        }
        reversed_completed.reverse();

        let set2 = RequiredModuleSet::new(rotated_required).unwrap();
        let record2: CompletionRecord = reversed_completed.into_iter().collect();

        prop_assert_eq!(is_certified(&set, &record), is_certified(&set2, &record2));
        prop_assert_eq!(module_progress(&set, &record), module_progress(&set2, &record2));
    }

    #[test]
    fn full_record_always_certifies(required in arb_required(), extras in arb_completed()) {
        let set = RequiredModuleSet::new(required.clone()).unwrap();
        let record: CompletionRecord = required.iter().cloned().chain(extras).collect();
        prop_assert!(is_certified(&set, &record));
    }

    #[test]
    fn progress_is_100_exactly_when_certified(required in arb_required(), completed in arb_completed()) {
        prop_assume!(!required.is_empty());
        let set = RequiredModuleSet::new(required).unwrap();
        let record: CompletionRecord = completed.into_iter().collect();
        prop_assert_eq!(module_progress(&set, &record) == 100, is_certified(&set, &record));
    }

    #[test]
    fn evaluator_agrees_with_free_functions(
        required in arb_required(),
        completed in arb_completed(),
        rounding in arb_rounding(),
    ) {
        let set = RequiredModuleSet::new(required).unwrap();
        let record: CompletionRecord = completed.into_iter().collect();
        let evaluator = CertificationEvaluator::new(set.clone()).with_rounding(rounding);

        prop_assert_eq!(evaluator.is_certified(&record), is_certified(&set, &record));
        prop_assert_eq!(
            evaluator.progress(&record),
            module_progress_with(&set, &record, rounding)
        );
        prop_assert_eq!(evaluator.missing(&record).is_empty(), evaluator.is_certified(&record));
    }
}

// ============================================================================
// Scoring
// ============================================================================

proptest! {
    #[test]
    fn zero_total_scores_zero(correct in any::<u32>(), rounding in arb_rounding()) {
        prop_assert_eq!(compute_score(correct, 0), 0);
        prop_assert_eq!(compute_score_with(correct, 0, rounding), 0);
    }

    #[test]
    fn in_range_scores_stay_in_range(total in 1u32..10_000, frac in 0.0f64..=1.0) {
        let correct = ((total as f64) * frac).floor() as u32;
        let score = compute_score(correct.min(total), total);
        prop_assert!(score <= 100);
    }

    #[test]
    fn score_is_repeatable(correct in any::<u32>(), total in any::<u32>()) {
        prop_assert_eq!(compute_score(correct, total), compute_score(correct, total));
    }

    #[test]
    fn score_is_within_half_a_point(correct in 0u32..100_000, total in 1u32..100_000, rounding in arb_rounding()) {
        let exact = correct as f64 * 100.0 / total as f64;
        let score = compute_score_with(correct, total, rounding) as f64;
        prop_assert!((score - exact).abs() <= 0.5 + 1e-9, "score {} exact {}", score, exact);
    }

    #[test]
    fn score_is_monotonic_in_correct(correct in 0u32..1_000, total in 1u32..1_000) {
        prop_assert!(compute_score(correct, total) <= compute_score(correct + 1, total));
    }
}

//! Property-based tests for lethality scoring
//!
//! - Scores stay within [0, 100] for every subset
//! - Adding an indicator never lowers the score
//! - The level always agrees with the threshold table

use dvtriage::lethality::classify;
use dvtriage::{DangerIndicator, DangerIndicatorSet, LethalityScorer, RiskLevel};
use proptest::prelude::*;

fn indicator_subset() -> impl Strategy<Value = Vec<DangerIndicator>> {
    proptest::sample::subsequence(DangerIndicator::ALL.to_vec(), 0..=DangerIndicator::ALL.len())
}

proptest! {
    #[test]
    fn prop_score_is_bounded(subset in indicator_subset()) {
        let result = LethalityScorer::new().score(&DangerIndicatorSet::with_present(subset));
        prop_assert!((0.0..=100.0).contains(&result.score));
        prop_assert_eq!(result.level, classify(result.score));
    }

    #[test]
    fn prop_adding_an_indicator_never_lowers_score(
        subset in indicator_subset(),
        extra in proptest::sample::select(DangerIndicator::ALL.to_vec()),
    ) {
        let scorer = LethalityScorer::new();
        let before = scorer.score(&DangerIndicatorSet::with_present(subset.clone()));

        let mut grown = DangerIndicatorSet::with_present(subset);
        grown.set(extra, true);
        let after = scorer.score(&grown);

        prop_assert!(after.score >= before.score);
        prop_assert!(after.level >= before.level);
    }

    #[test]
    fn prop_unknown_keys_do_not_change_score(
        subset in indicator_subset(),
        noise in proptest::collection::btree_map("[A-Z][a-z_]{2,12}", any::<bool>(), 0..5),
    ) {
        let scorer = LethalityScorer::new();
        let clean = scorer.score(&DangerIndicatorSet::with_present(subset.clone()));

        let noisy: DangerIndicatorSet = subset
            .iter()
            .map(|indicator| (indicator.key().to_string(), true))
            .chain(noise)
            .collect();

        prop_assert_eq!(scorer.score(&noisy), clean);
    }

    #[test]
    fn prop_false_answers_score_like_absent(subset in indicator_subset()) {
        let mut explicit = DangerIndicatorSet::new();
        for indicator in DangerIndicator::ALL {
            explicit.set(indicator, subset.contains(&indicator));
        }
        let sparse = DangerIndicatorSet::with_present(subset);

        let scorer = LethalityScorer::new();
        prop_assert_eq!(scorer.score(&explicit), scorer.score(&sparse));
    }
}

#[test]
fn test_every_single_indicator_is_low() {
    for indicator in DangerIndicator::ALL {
        let result = LethalityScorer::new().score(&DangerIndicatorSet::with_present([indicator]));
        assert_eq!(result.level, RiskLevel::Low, "{indicator}");
    }
}

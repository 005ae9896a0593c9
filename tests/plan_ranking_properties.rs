//! Property tests for plan identifier normalization and action resolution.

use proptest::prelude::*;

use plan_ladder::domain::plans::{can_purchase_credits, PlanAction, PlanId, PlanTier};

fn tier() -> impl Strategy<Value = PlanTier> {
    prop::sample::select(PlanTier::ALL.to_vec())
}

/// Raw identifiers as they may sit in a profile record.
fn raw_plan_id() -> impl Strategy<Value = String> {
    prop_oneof![
        tier().prop_map(|t| t.canonical_id().to_string()),
        tier().prop_map(|t| t.id().to_string()),
        Just("basic".to_string()),
        Just("  Basic ".to_string()),
        Just(String::new()),
        "[a-zA-Z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn resolve_follows_rank_order(current in tier(), candidate in tier()) {
        let action = PlanAction::resolve(current.canonical_id(), candidate.canonical_id());
        let expected = if current == candidate {
            PlanAction::Current
        } else if current.rank() < candidate.rank() {
            PlanAction::Upgrade
        } else {
            PlanAction::Downgrade
        };
        prop_assert_eq!(action, expected);
    }

    #[test]
    fn resolve_is_deterministic(current in raw_plan_id(), candidate in raw_plan_id()) {
        prop_assert_eq!(
            PlanAction::resolve(&current, &candidate),
            PlanAction::resolve(&current, &candidate)
        );
    }

    #[test]
    fn exactly_one_card_is_current(raw in raw_plan_id()) {
        let current = PlanId::parse(&raw);
        let currents = PlanTier::ALL
            .iter()
            .filter(|t| PlanAction::between(&current, &PlanId::from(**t)).is_current())
            .count();
        let expected = usize::from(current.tier().is_some());
        prop_assert_eq!(currents, expected);
    }

    #[test]
    fn normalization_is_idempotent(raw in raw_plan_id()) {
        let once = PlanId::parse(&raw);
        let twice = PlanId::parse(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unknown_ids_rank_with_free(raw in "[XYZ][a-z]{3,8}") {
        let id = PlanId::parse(&raw);
        prop_assert!(id.tier().is_none());
        prop_assert_eq!(id.rank(), PlanId::free().rank());
    }

    #[test]
    fn only_free_is_barred_from_credits(raw in raw_plan_id()) {
        let id = PlanId::parse(&raw);
        prop_assert_eq!(can_purchase_credits(&id), !id.is_free());
    }
}

#[test]
fn normalization_examples() {
    assert_eq!(PlanId::normalize(None).as_str(), "FREE");
    assert_eq!(PlanId::normalize(Some("basic")).as_str(), "STARTER");
    assert_eq!(PlanId::normalize(Some("PRO")).as_str(), "PRO");
    assert_eq!(PlanId::normalize(Some("unknown-value")).as_str(), "UNKNOWN-VALUE");
    assert_eq!(PlanId::parse("unknown-value").rank(), PlanId::free().rank());
}

#[test]
fn credit_eligibility_examples() {
    assert!(!can_purchase_credits(&PlanId::parse("FREE")));
    for tier in ["STARTER", "PRO", "AGENCY"] {
        assert!(can_purchase_credits(&PlanId::parse(tier)));
    }
}

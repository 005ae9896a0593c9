//! Action resolution between the viewer's plan and a displayed tier.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::PlanId;

/// What the action button of a tier card does for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanAction {
    /// The tier is the viewer's plan; the button is disabled.
    Current,
    Upgrade,
    Downgrade,
}

impl PlanAction {
    /// Resolves the action for already-canonical identifiers.
    ///
    /// `Current` requires exact identifier equality. Otherwise the ranks
    /// decide: a higher current rank is a downgrade, anything else an upgrade.
    pub fn between(current: &PlanId, candidate: &PlanId) -> Self {
        if current == candidate {
            return PlanAction::Current;
        }
        match current.rank().cmp(&candidate.rank()) {
            Ordering::Greater => PlanAction::Downgrade,
            Ordering::Less | Ordering::Equal => PlanAction::Upgrade,
        }
    }

    /// Resolves the action for raw identifiers, normalizing both first.
    pub fn resolve(current: &str, candidate: &str) -> Self {
        Self::between(&PlanId::parse(current), &PlanId::parse(candidate))
    }

    /// Direction of a plan change, `None` for the current plan.
    pub fn direction(&self) -> Option<ChangeDirection> {
        match self {
            PlanAction::Current => None,
            PlanAction::Upgrade => Some(ChangeDirection::Upgrade),
            PlanAction::Downgrade => Some(ChangeDirection::Downgrade),
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, PlanAction::Current)
    }
}

/// Direction of a requested plan change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Upgrade,
    Downgrade,
}

impl ChangeDirection {
    /// Label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeDirection::Upgrade => "Upgrade",
            ChangeDirection::Downgrade => "Downgrade",
        }
    }
}

//! Total order over plan identifiers.

use serde::{Deserialize, Serialize};

use super::PlanId;

/// Position of a plan in the tier ladder.
///
/// FREE=0, STARTER=1, PRO=2, AGENCY=3. Identifiers outside the catalog
/// rank as [`PlanRank::LOWEST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanRank(u8);

impl PlanRank {
    pub const LOWEST: PlanRank = PlanRank(0);

    /// Looks up the rank of a canonical identifier.
    pub fn of(plan: &PlanId) -> Self {
        plan.tier()
            .map(|tier| PlanRank(tier.rank()))
            .unwrap_or(Self::LOWEST)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for any rank above the free plan.
    pub fn is_paid(&self) -> bool {
        *self > Self::LOWEST
    }
}

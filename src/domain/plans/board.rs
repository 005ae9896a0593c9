//! Tier cards as shown to one viewer.

use serde::{Deserialize, Serialize};

use super::{PlanAction, PlanCatalog, PlanCatalogEntry, PlanId, PlanRank};

/// Which catalog tiers are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierVisibility {
    /// Every tier, the free one included.
    #[default]
    ShowAll,
    /// Hide rank-0 tiers from viewers on a paid rank.
    HideFreeForPaid,
}

impl TierVisibility {
    /// Whether a tier card is listed for a viewer at `viewer_rank`.
    pub fn is_visible(&self, viewer_rank: PlanRank, tier_rank: PlanRank) -> bool {
        match self {
            TierVisibility::ShowAll => true,
            TierVisibility::HideFreeForPaid => {
                !(viewer_rank.is_paid() && tier_rank == PlanRank::LOWEST)
            }
        }
    }
}

/// One catalog tier with the action it offers the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCard {
    pub entry: &'static PlanCatalogEntry,
    pub action: PlanAction,
}

impl PlanCard {
    pub fn is_current(&self) -> bool {
        self.action.is_current()
    }
}

/// Builds the tier cards for a viewer.
pub struct PlanBoard;

impl PlanBoard {
    /// Cards for every visible tier, in catalog order.
    pub fn for_plan(current: &PlanId, visibility: TierVisibility) -> Vec<PlanCard> {
        let viewer_rank = current.rank();
        PlanCatalog::entries()
            .iter()
            .filter(|entry| {
                let tier_rank = PlanId::from(entry.tier).rank();
                visibility.is_visible(viewer_rank, tier_rank)
            })
            .map(|entry| PlanCard {
                entry,
                action: PlanAction::between(current, &PlanId::from(entry.tier)),
            })
            .collect()
    }
}

//! Plan tier definitions.
//!
//! Represents the subscription levels shown on the plans page.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::PlanError;

/// Subscription tier.
///
/// Variants are declared in rank order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Free tier - exploration only, no add-on credits.
    Free,

    /// Entry paid tier.
    Starter,

    /// Professional tier.
    Pro,

    /// Team tier - highest rank.
    Agency,
}

impl PlanTier {
    /// All tiers in catalog (and rank) order.
    pub const ALL: [PlanTier; 4] = [
        PlanTier::Free,
        PlanTier::Starter,
        PlanTier::Pro,
        PlanTier::Agency,
    ];

    /// Returns true if this tier is a paid tier.
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Starter => "Starter",
            PlanTier::Pro => "Pro",
            PlanTier::Agency => "Agency",
        }
    }

    /// Lowercase catalog token (`free`, `starter`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Starter => "starter",
            PlanTier::Pro => "pro",
            PlanTier::Agency => "agency",
        }
    }

    /// Uppercase canonical identifier used for rank and eligibility lookups.
    pub fn canonical_id(&self) -> &'static str {
        match self {
            PlanTier::Free => "FREE",
            PlanTier::Starter => "STARTER",
            PlanTier::Pro => "PRO",
            PlanTier::Agency => "AGENCY",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more features.
    pub fn rank(&self) -> u8 {
        match self {
            PlanTier::Free => 0,
            PlanTier::Starter => 1,
            PlanTier::Pro => 2,
            PlanTier::Agency => 3,
        }
    }

    /// Looks up a tier by its canonical (uppercase, de-aliased) identifier.
    pub fn from_canonical(canonical: &str) -> Option<PlanTier> {
        PlanTier::ALL
            .into_iter()
            .find(|tier| tier.canonical_id() == canonical)
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PlanTier {
    type Err = PlanError;

    /// Parses any spelling that normalizes to a known tier, legacy aliases included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::PlanId::parse(s)
            .tier()
            .ok_or_else(|| PlanError::unknown_tier(s))
    }
}

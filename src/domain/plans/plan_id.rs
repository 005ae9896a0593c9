//! Canonical plan identifiers.
//!
//! Every plan identifier that reaches rank or eligibility lookups goes
//! through [`PlanId::normalize`]: trimmed, uppercased and de-aliased.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PlanRank, PlanTier};

/// Historical identifiers that were renamed. Persisted values may still
/// carry the old spelling.
const LEGACY_ALIASES: &[(&str, &str)] = &[("BASIC", "STARTER")];

/// Canonical plan identifier.
///
/// Unknown identifiers are kept as-is (uppercased); they rank as the lowest
/// plan wherever used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    /// Normalizes a raw, possibly missing identifier.
    ///
    /// - missing or blank -> `FREE`
    /// - case-folded to uppercase
    /// - legacy aliases (`BASIC`) -> current name (`STARTER`)
    pub fn normalize(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Self::free();
        }

        let upper = trimmed.to_uppercase();
        match LEGACY_ALIASES.iter().find(|(legacy, _)| *legacy == upper) {
            Some((legacy, current)) => {
                tracing::debug!(legacy = %legacy, current = %current, "Resolved legacy plan identifier");
                Self((*current).to_string())
            }
            None => Self(upper),
        }
    }

    /// Normalizes a present identifier.
    pub fn parse(raw: &str) -> Self {
        Self::normalize(Some(raw))
    }

    /// The lowest-rank plan, used as the default everywhere.
    pub fn free() -> Self {
        Self::from(PlanTier::Free)
    }

    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the catalog tier, if this identifier names one.
    pub fn tier(&self) -> Option<PlanTier> {
        PlanTier::from_canonical(&self.0)
    }

    /// Rank of this identifier (lowest for unknown identifiers).
    pub fn rank(&self) -> PlanRank {
        PlanRank::of(self)
    }

    /// Returns true for the free plan.
    pub fn is_free(&self) -> bool {
        self.tier() == Some(PlanTier::Free)
    }

    /// Human-facing name: the catalog name for known tiers, title case otherwise.
    pub fn display_name(&self) -> String {
        if let Some(tier) = self.tier() {
            return tier.display_name().to_string();
        }
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl From<PlanTier> for PlanId {
    fn from(tier: PlanTier) -> Self {
        Self(tier.canonical_id().to_string())
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

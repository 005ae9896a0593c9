//! Add-on credit purchase gate.

use super::PlanId;

/// Returns false iff the viewer is on the free plan.
///
/// Identifiers outside the catalog are not free and therefore eligible.
pub fn can_purchase_credits(current: &PlanId) -> bool {
    !current.is_free()
}

//! Billing gateway port.
//!
//! Plan changes and add-on credit purchases are submitted as commands; the
//! gateway answers with a receipt or a failure. The only adapter today is a
//! simulation, a real checkout integration plugs in behind the same trait.
//!
//! # Design
//!
//! - **Fire and acknowledge**: `submit` returns once the command is accepted,
//!   not when checkout completes
//! - **No retries**: callers surface failures to the viewer as-is

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{BillingCommandId, Timestamp, UserId};
use crate::domain::plans::{ChangeDirection, PlanId, PlanTier};

/// Port for billing integrations.
#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// Submits a command, returning the receipt of acceptance.
    async fn submit(&self, command: BillingCommand) -> Result<BillingReceipt, BillingError>;
}

/// A request to the billing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BillingCommand {
    /// Move the viewer to another tier.
    ChangePlan {
        viewer: Option<UserId>,
        from: PlanId,
        to: PlanTier,
        direction: ChangeDirection,
    },

    /// Buy an add-on credit package.
    PurchaseCredits {
        viewer: Option<UserId>,
        plan: PlanId,
        amount: u32,
    },
}

impl BillingCommand {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BillingCommand::ChangePlan { .. } => "change_plan",
            BillingCommand::PurchaseCredits { .. } => "purchase_credits",
        }
    }

    pub fn viewer(&self) -> Option<&UserId> {
        match self {
            BillingCommand::ChangePlan { viewer, .. }
            | BillingCommand::PurchaseCredits { viewer, .. } => viewer.as_ref(),
        }
    }
}

/// Acknowledgement of a submitted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingReceipt {
    pub command_id: BillingCommandId,
    pub status: BillingStatus,
    pub submitted_at: Timestamp,
}

impl BillingReceipt {
    /// Receipt for a command handed to checkout.
    pub fn pending() -> Self {
        Self {
            command_id: BillingCommandId::new(),
            status: BillingStatus::Pending,
            submitted_at: Timestamp::now(),
        }
    }
}

/// Where the command stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    /// Accepted; checkout continues elsewhere.
    Pending,
}

/// Billing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("Billing service unavailable: {0}")]
    Unavailable(String),

    #[error("Billing command rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn BillingGateway) {}
    }

    #[test]
    fn command_kind_names() {
        let change = BillingCommand::ChangePlan {
            viewer: None,
            from: PlanId::free(),
            to: PlanTier::Pro,
            direction: ChangeDirection::Upgrade,
        };
        let credits = BillingCommand::PurchaseCredits {
            viewer: Some(UserId::new("u-1").unwrap()),
            plan: PlanId::parse("pro"),
            amount: 500,
        };
        assert_eq!(change.kind(), "change_plan");
        assert_eq!(credits.kind(), "purchase_credits");
        assert!(change.viewer().is_none());
        assert_eq!(credits.viewer().unwrap().as_str(), "u-1");
    }

    #[test]
    fn command_serializes_with_type_tag() {
        let cmd = BillingCommand::PurchaseCredits {
            viewer: None,
            plan: PlanId::parse("agency"),
            amount: 4000,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "purchase_credits");
        assert_eq!(json["plan"], "AGENCY");
        assert_eq!(json["amount"], 4000);
    }

    #[test]
    fn pending_receipt_is_pending() {
        assert_eq!(BillingReceipt::pending().status, BillingStatus::Pending);
    }
}

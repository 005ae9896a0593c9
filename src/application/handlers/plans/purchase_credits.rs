//! PurchaseCreditsHandler - Command handler for add-on credit purchases.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::notification::Notification;
use crate::domain::plans::{can_purchase_credits, PlanCatalog, PlanError, PlanId};
use crate::ports::{BillingCommand, BillingGateway, BillingReceipt};

/// Command to buy a credit package.
#[derive(Debug, Clone)]
pub struct PurchaseCreditsCommand {
    pub viewer: Option<UserId>,
    pub current: PlanId,
    pub amount: u32,
}

/// How a purchase attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditPurchaseOutcome {
    /// The viewer's plan does not allow purchases.
    Denied,
    /// Handed to checkout.
    Submitted,
    /// The billing service did not take the command.
    Failed,
}

/// Result of a purchase attempt.
#[derive(Debug, Clone)]
pub struct PurchaseCreditsResult {
    pub outcome: CreditPurchaseOutcome,
    pub notification: Notification,
    pub receipt: Option<BillingReceipt>,
}

impl PurchaseCreditsResult {
    pub fn accepted(&self) -> bool {
        self.outcome == CreditPurchaseOutcome::Submitted
    }
}

/// Handler for credit purchases.
#[derive(Clone)]
pub struct PurchaseCreditsHandler {
    gateway: Arc<dyn BillingGateway>,
}

impl PurchaseCreditsHandler {
    pub fn new(gateway: Arc<dyn BillingGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: PurchaseCreditsCommand) -> Result<PurchaseCreditsResult, PlanError> {
        // 1. Free plans never buy, whatever the amount
        if !can_purchase_credits(&cmd.current) {
            tracing::debug!(amount = cmd.amount, "Credit purchase denied on free plan");
            return Ok(PurchaseCreditsResult {
                outcome: CreditPurchaseOutcome::Denied,
                notification: Notification::credit_purchase_denied(),
                receipt: None,
            });
        }

        // 2. Only catalog packages can be bought
        let package = PlanCatalog::credit_package(cmd.amount)
            .ok_or_else(|| PlanError::unknown_credit_package(cmd.amount))?;

        // 3. Hand the purchase to billing
        let command = BillingCommand::PurchaseCredits {
            viewer: cmd.viewer,
            plan: cmd.current,
            amount: package.amount,
        };

        match self.gateway.submit(command).await {
            Ok(receipt) => Ok(PurchaseCreditsResult {
                outcome: CreditPurchaseOutcome::Submitted,
                notification: Notification::credit_purchase_started(package.amount),
                receipt: Some(receipt),
            }),
            Err(e) => {
                tracing::warn!(amount = package.amount, error = %e, "Credit purchase could not be submitted");
                Ok(PurchaseCreditsResult {
                    outcome: CreditPurchaseOutcome::Failed,
                    notification: Notification::billing_unavailable(),
                    receipt: None,
                })
            }
        }
    }
}

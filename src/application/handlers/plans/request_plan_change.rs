//! RequestPlanChangeHandler - Command handler for starting an upgrade or downgrade.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::notification::Notification;
use crate::domain::plans::{ChangeDirection, PlanAction, PlanError, PlanId, PlanTier};
use crate::ports::{BillingCommand, BillingGateway, BillingReceipt};

/// Command to move the viewer from `current` to `target`.
#[derive(Debug, Clone)]
pub struct RequestPlanChangeCommand {
    pub viewer: Option<UserId>,
    pub current: PlanId,
    pub target: PlanTier,
}

/// Result of a plan change request.
///
/// A gateway failure is not an error: `receipt` is `None` and the
/// notification says checkout could not start.
#[derive(Debug, Clone)]
pub struct PlanChangeResult {
    pub direction: ChangeDirection,
    pub notification: Notification,
    pub receipt: Option<BillingReceipt>,
}

impl PlanChangeResult {
    pub fn accepted(&self) -> bool {
        self.receipt.is_some()
    }
}

/// Handler for plan change requests.
#[derive(Clone)]
pub struct RequestPlanChangeHandler {
    gateway: Arc<dyn BillingGateway>,
}

impl RequestPlanChangeHandler {
    pub fn new(gateway: Arc<dyn BillingGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: RequestPlanChangeCommand) -> Result<PlanChangeResult, PlanError> {
        // 1. Resolve the action for the target card
        let target = PlanId::from(cmd.target);
        let direction = match PlanAction::between(&cmd.current, &target).direction() {
            Some(direction) => direction,
            None => return Err(PlanError::already_on_plan(cmd.current.as_str())),
        };

        // 2. Hand the change to billing
        let command = BillingCommand::ChangePlan {
            viewer: cmd.viewer,
            from: cmd.current,
            to: cmd.target,
            direction,
        };

        match self.gateway.submit(command).await {
            Ok(receipt) => Ok(PlanChangeResult {
                direction,
                notification: Notification::plan_change_started(cmd.target, direction),
                receipt: Some(receipt),
            }),
            Err(e) => {
                tracing::warn!(
                    target_tier = %cmd.target,
                    direction = direction.label(),
                    error = %e,
                    "Plan change could not be submitted"
                );
                Ok(PlanChangeResult {
                    direction,
                    notification: Notification::billing_unavailable(),
                    receipt: None,
                })
            }
        }
    }
}

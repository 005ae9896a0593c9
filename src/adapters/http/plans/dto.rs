//! HTTP DTOs (Data Transfer Objects) for plan endpoints.
//!
//! These types define the JSON request/response structure for the plans API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::{CurrentPlan, PlanSource, PlansOverview};
use crate::domain::notification::{Notification, NotificationSeverity};
use crate::domain::plans::{CreditPackage, PlanAction, PlanCard};
use crate::ports::BillingReceipt;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to move to another tier.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePlanRequest {
    /// Tier identifier, e.g. `"pro"`. Legacy aliases are accepted.
    pub tier: String,
}

/// Request to buy a credit package.
#[derive(Debug, Clone, Deserialize)]
pub struct BuyCreditsRequest {
    /// Token amount of a catalog package.
    pub amount: u32,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// The viewer's plan.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentPlanResponse {
    pub plan_id: String,
    pub display_name: String,
    pub source: PlanSource,
}

impl From<CurrentPlan> for CurrentPlanResponse {
    fn from(plan: CurrentPlan) -> Self {
        Self {
            plan_id: plan.plan_id.as_str().to_string(),
            display_name: plan.display_name,
            source: plan.source,
        }
    }
}

/// One tier card.
#[derive(Debug, Clone, Serialize)]
pub struct PlanCardResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: &'static str,
    pub accent: &'static str,
    pub popular: bool,
    pub action: PlanAction,
}

impl From<PlanCard> for PlanCardResponse {
    fn from(card: PlanCard) -> Self {
        let entry = card.entry;
        Self {
            id: entry.tier.id(),
            name: entry.name,
            price: entry.price_label,
            description: entry.description,
            features: entry.features,
            icon: entry.icon,
            accent: entry.accent,
            popular: entry.popular,
            action: card.action,
        }
    }
}

/// One add-on credit package.
#[derive(Debug, Clone, Serialize)]
pub struct CreditPackageResponse {
    pub amount: u32,
    pub price: &'static str,
    pub label: &'static str,
    pub popular: bool,
}

impl From<&CreditPackage> for CreditPackageResponse {
    fn from(package: &CreditPackage) -> Self {
        Self {
            amount: package.amount,
            price: package.price_label,
            label: package.label,
            popular: package.popular,
        }
    }
}

/// Everything the plans page shows.
#[derive(Debug, Clone, Serialize)]
pub struct PlansOverviewResponse {
    pub current_plan: CurrentPlanResponse,
    pub plans: Vec<PlanCardResponse>,
    pub credit_packages: Vec<CreditPackageResponse>,
    pub can_purchase_credits: bool,
}

impl From<PlansOverview> for PlansOverviewResponse {
    fn from(overview: PlansOverview) -> Self {
        Self {
            current_plan: overview.current_plan.into(),
            plans: overview.cards.into_iter().map(Into::into).collect(),
            credit_packages: overview.credit_packages.iter().map(Into::into).collect(),
            can_purchase_credits: overview.can_purchase_credits,
        }
    }
}

/// A notification as the page renders it.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationView {
    pub severity: NotificationSeverity,
    pub title: String,
    pub message: String,
    /// `None` keeps it visible until replaced.
    pub dismiss_after_ms: Option<u64>,
}

/// Outcome of a plan change or credit purchase.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    /// Whether billing took the command.
    pub accepted: bool,
    pub notification: NotificationView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<BillingReceipt>,
}

impl ActionResponse {
    pub fn new(
        accepted: bool,
        notification: Notification,
        dismiss_after_ms: Option<u64>,
        receipt: Option<BillingReceipt>,
    ) -> Self {
        Self {
            accepted,
            notification: NotificationView {
                severity: notification.severity,
                title: notification.title,
                message: notification.message,
                dismiss_after_ms,
            },
            receipt,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

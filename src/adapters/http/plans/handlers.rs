//! HTTP handlers for plan endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.
//! Each request resolves the viewer's plan afresh; nothing is kept between requests.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    CreditPurchaseOutcome, CurrentPlan, GetCurrentPlanHandler, GetCurrentPlanQuery,
    GetPlansOverviewHandler, GetPlansOverviewQuery, PlansSettings, PurchaseCreditsCommand,
    PurchaseCreditsHandler, RequestPlanChangeCommand, RequestPlanChangeHandler,
};
use crate::domain::foundation::UserId;
use crate::domain::notification::Notification;
use crate::domain::plans::{PlanError, PlanTier};
use crate::ports::{BillingGateway, BillingReceipt, PlanReader};

use super::super::viewer::Viewer;
use super::dto::{
    ActionResponse, BuyCreditsRequest, ChangePlanRequest, CurrentPlanResponse, ErrorResponse,
    PlansOverviewResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct PlansAppState {
    pub plan_reader: Arc<dyn PlanReader>,
    pub billing_gateway: Arc<dyn BillingGateway>,
    pub settings: PlansSettings,
}

impl PlansAppState {
    pub fn current_plan_handler(&self) -> GetCurrentPlanHandler {
        GetCurrentPlanHandler::new(self.plan_reader.clone(), self.settings.lookup_timeout)
    }

    pub fn overview_handler(&self) -> GetPlansOverviewHandler {
        GetPlansOverviewHandler::new(self.current_plan_handler(), self.settings.visibility)
    }

    pub fn plan_change_handler(&self) -> RequestPlanChangeHandler {
        RequestPlanChangeHandler::new(self.billing_gateway.clone())
    }

    pub fn purchase_credits_handler(&self) -> PurchaseCreditsHandler {
        PurchaseCreditsHandler::new(self.billing_gateway.clone())
    }

    async fn resolve_current(&self, viewer: Option<UserId>) -> CurrentPlan {
        self.current_plan_handler()
            .handle(GetCurrentPlanQuery { viewer })
            .await
    }

    fn action_response(
        &self,
        accepted: bool,
        notification: Notification,
        receipt: Option<BillingReceipt>,
    ) -> ActionResponse {
        let dismiss_after_ms = self
            .settings
            .timings
            .dismiss_after(notification.severity)
            .map(|d| d.as_millis() as u64);
        ActionResponse::new(accepted, notification, dismiss_after_ms, receipt)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/plans - Tier cards, credit packages and the viewer's plan
pub async fn get_plans(
    State(state): State<PlansAppState>,
    Viewer(viewer): Viewer,
) -> impl IntoResponse {
    let overview = state
        .overview_handler()
        .handle(GetPlansOverviewQuery { viewer })
        .await;
    Json(PlansOverviewResponse::from(overview))
}

/// GET /api/plans/current - The viewer's plan only
pub async fn get_current_plan(
    State(state): State<PlansAppState>,
    Viewer(viewer): Viewer,
) -> impl IntoResponse {
    let current = state.resolve_current(viewer).await;
    Json(CurrentPlanResponse::from(current))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/plans/change - Start an upgrade or downgrade
pub async fn change_plan(
    State(state): State<PlansAppState>,
    Viewer(viewer): Viewer,
    Json(request): Json<ChangePlanRequest>,
) -> Result<impl IntoResponse, PlansApiError> {
    if request.tier.trim().is_empty() {
        return Err(PlanError::validation("tier", "must not be empty").into());
    }
    let target: PlanTier = request.tier.parse()?;
    let current = state.resolve_current(viewer.clone()).await;

    let result = state
        .plan_change_handler()
        .handle(RequestPlanChangeCommand {
            viewer,
            current: current.plan_id,
            target,
        })
        .await?;

    let accepted = result.accepted();
    let status = if accepted {
        StatusCode::ACCEPTED
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let response = state.action_response(accepted, result.notification, result.receipt);
    Ok((status, Json(response)))
}

/// POST /api/plans/credits - Buy an add-on credit package
pub async fn buy_credits(
    State(state): State<PlansAppState>,
    Viewer(viewer): Viewer,
    Json(request): Json<BuyCreditsRequest>,
) -> Result<impl IntoResponse, PlansApiError> {
    let current = state.resolve_current(viewer.clone()).await;

    let result = state
        .purchase_credits_handler()
        .handle(PurchaseCreditsCommand {
            viewer,
            current: current.plan_id,
            amount: request.amount,
        })
        .await?;

    let status = match result.outcome {
        CreditPurchaseOutcome::Submitted | CreditPurchaseOutcome::Denied => StatusCode::OK,
        CreditPurchaseOutcome::Failed => StatusCode::SERVICE_UNAVAILABLE,
    };
    let accepted = result.accepted();
    let response = state.action_response(accepted, result.notification, result.receipt);
    Ok((status, Json(response)))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for converting plan errors to HTTP responses.
#[derive(Debug)]
pub struct PlansApiError(PlanError);

impl From<PlanError> for PlansApiError {
    fn from(err: PlanError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlansApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PlanError::UnknownTier(_)
            | PlanError::UnknownCreditPackage(_)
            | PlanError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            PlanError::AlreadyOnPlan(_) | PlanError::StillLoading => StatusCode::CONFLICT,
        };

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

//! Axum router configuration for plan endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{buy_credits, change_plan, get_current_plan, get_plans, PlansAppState};

/// Create the plans API router.
///
/// # Routes
/// - `GET /` - Tier cards, credit packages and the viewer's plan
/// - `GET /current` - The viewer's plan
/// - `POST /change` - Start an upgrade or downgrade
/// - `POST /credits` - Buy a credit package
pub fn plans_routes() -> Router<PlansAppState> {
    Router::new()
        .route("/", get(get_plans))
        .route("/current", get(get_current_plan))
        .route("/change", post(change_plan))
        .route("/credits", post(buy_credits))
}

/// Create the complete plans module router, mounted at `/plans`.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", plans_router())
///     .with_state(state);
/// ```
pub fn plans_router() -> Router<PlansAppState> {
    Router::new().nest("/plans", plans_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::billing::SimulatedBillingGateway;
    use crate::adapters::memory::InMemoryPlanReader;
    use crate::application::PlansSettings;
    use crate::domain::foundation::UserId;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with_plan(plan: Option<&str>) -> Router {
        let reader = InMemoryPlanReader::new();
        reader.set_plan(UserId::new("viewer-1").unwrap(), plan).await;
        let state = PlansAppState {
            plan_reader: Arc::new(reader),
            billing_gateway: Arc::new(SimulatedBillingGateway::instant()),
            settings: PlansSettings::default(),
        };
        Router::new().nest("/api", plans_router()).with_state(state)
    }

    #[tokio::test]
    async fn plans_route_exists() {
        let response = app_with_plan(None)
            .await
            .oneshot(Request::builder().uri("/api/plans").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn change_route_requires_json() {
        let response = app_with_plan(Some("PRO"))
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/plans/change")
                    .header("X-User-Id", "viewer-1")
                    .body(Body::from("tier=pro"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = app_with_plan(None)
            .await
            .oneshot(Request::builder().uri("/api/plans/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

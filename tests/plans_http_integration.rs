//! Integration tests for plan HTTP endpoints.
//!
//! These tests drive the full router (layers included) through
//! `tower::ServiceExt::oneshot` with in-memory adapters:
//! 1. Plan listing resolves actions against the stored plan
//! 2. Plan changes return 202, 409 or 400
//! 3. Credit purchases are gated on paid plans

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use plan_ladder::adapters::http::{create_app, PlansAppState, USER_ID_HEADER};
use plan_ladder::adapters::{InMemoryPlanReader, SimulatedBillingGateway};
use plan_ladder::application::PlansSettings;
use plan_ladder::config::ServerConfig;
use plan_ladder::domain::foundation::UserId;
use plan_ladder::ports::{BillingCommand, BillingError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const VIEWER: &str = "viewer-1";

struct TestApp {
    router: Router,
    reader: InMemoryPlanReader,
    gateway: SimulatedBillingGateway,
}

impl TestApp {
    async fn with_plan(plan: Option<&str>) -> Self {
        let reader = InMemoryPlanReader::new();
        reader.set_plan(UserId::new(VIEWER).unwrap(), plan).await;
        let gateway = SimulatedBillingGateway::instant().with_recording();

        let state = PlansAppState {
            plan_reader: Arc::new(reader.clone()),
            billing_gateway: Arc::new(gateway.clone()),
            settings: PlansSettings::default(),
        };

        Self {
            router: create_app(state, &ServerConfig::default()),
            reader,
            gateway,
        }
    }

    async fn get(&self, uri: &str, viewer: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(viewer) = viewer {
            request = request.header(USER_ID_HEADER, viewer);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    async fn post(&self, uri: &str, viewer: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(viewer) = viewer {
            request = request.header(USER_ID_HEADER, viewer);
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

fn action_of(body: &Value, id: &str) -> String {
    body["plans"]
        .as_array()
        .unwrap()
        .iter()
        .find(|card| card["id"] == id)
        .map(|card| card["action"].as_str().unwrap().to_string())
        .unwrap()
}

// =============================================================================
// Plan listing
// =============================================================================

#[tokio::test]
async fn legacy_basic_viewer_sees_starter_as_current() {
    let app = TestApp::with_plan(Some("BASIC")).await;

    let (status, body) = app.get("/api/plans", Some(VIEWER)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_plan"]["display_name"], "Starter");
    assert_eq!(action_of(&body, "free"), "downgrade");
    assert_eq!(action_of(&body, "starter"), "current");
    assert_eq!(action_of(&body, "pro"), "upgrade");
    assert_eq!(action_of(&body, "agency"), "upgrade");
    assert_eq!(body["can_purchase_credits"], true);
}

#[tokio::test]
async fn anonymous_viewer_sees_free_plan() {
    let app = TestApp::with_plan(Some("AGENCY")).await;

    let (status, body) = app.get("/api/plans", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_plan"]["display_name"], "Free");
    assert_eq!(body["current_plan"]["source"], "anonymous");
    assert_eq!(action_of(&body, "free"), "current");
    assert_eq!(body["can_purchase_credits"], false);
}

#[tokio::test]
async fn catalog_content_is_listed() {
    let app = TestApp::with_plan(None).await;

    let (_, body) = app.get("/api/plans", Some(VIEWER)).await;

    let plans = body["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 4);
    assert_eq!(plans[2]["price"], "R$ 197/mês");
    assert_eq!(plans[2]["popular"], true);
    let packages = body["credit_packages"].as_array().unwrap();
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[1]["amount"], 1500);
    assert_eq!(packages[1]["popular"], true);
}

#[tokio::test]
async fn failing_reader_degrades_to_free() {
    let app = TestApp::with_plan(Some("PRO")).await;
    app.reader.set_failing(true);

    let (status, body) = app.get("/api/plans/current", Some(VIEWER)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["plan_id"], "FREE");
    assert_eq!(body["source"], "fallback");
}

#[tokio::test]
async fn unknown_stored_plan_ranks_lowest() {
    let app = TestApp::with_plan(Some("enterprise")).await;

    let (_, body) = app.get("/api/plans", Some(VIEWER)).await;

    assert_eq!(body["current_plan"]["plan_id"], "ENTERPRISE");
    assert_eq!(body["current_plan"]["display_name"], "Enterprise");
    assert_eq!(action_of(&body, "free"), "upgrade");
    assert_eq!(body["can_purchase_credits"], true);
}

// =============================================================================
// Plan changes
// =============================================================================

#[tokio::test]
async fn upgrade_is_accepted() {
    let app = TestApp::with_plan(Some("FREE")).await;

    let (status, body) = app
        .post("/api/plans/change", Some(VIEWER), json!({ "tier": "pro" }))
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["accepted"], true);
    assert_eq!(body["notification"]["severity"], "info");
    assert_eq!(
        body["notification"]["message"],
        "Iniciando fluxo de Upgrade para o plano Pro..."
    );
    assert_eq!(body["notification"]["dismiss_after_ms"], 3000);
    assert_eq!(body["receipt"]["status"], "pending");
    assert_eq!(app.gateway.submission_count(), 1);
}

#[tokio::test]
async fn downgrade_from_agency_is_accepted() {
    let app = TestApp::with_plan(Some("AGENCY")).await;

    let (status, body) = app
        .post("/api/plans/change", Some(VIEWER), json!({ "tier": "starter" }))
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(
        body["notification"]["message"],
        "Iniciando fluxo de Downgrade para o plano Starter..."
    );
}

#[tokio::test]
async fn change_to_current_plan_conflicts() {
    let app = TestApp::with_plan(Some("basic")).await;

    let (status, body) = app
        .post("/api/plans/change", Some(VIEWER), json!({ "tier": "starter" }))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "ALREADY_ON_PLAN");
    assert_eq!(app.gateway.submission_count(), 0);
}

#[tokio::test]
async fn unknown_tier_is_bad_request() {
    let app = TestApp::with_plan(Some("PRO")).await;

    let (status, body) = app
        .post("/api/plans/change", Some(VIEWER), json!({ "tier": "platinum" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "UNKNOWN_TIER");
}

#[tokio::test]
async fn gateway_outage_is_service_unavailable() {
    let app = TestApp::with_plan(Some("PRO")).await;
    app.gateway
        .fail_next(BillingError::Unavailable("maintenance".into()));

    let (status, body) = app
        .post("/api/plans/change", Some(VIEWER), json!({ "tier": "agency" }))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["accepted"], false);
    assert_eq!(body["notification"]["severity"], "error");
    assert!(body["notification"]["dismiss_after_ms"].is_null());
}

// =============================================================================
// Credit purchases
// =============================================================================

#[tokio::test]
async fn anonymous_purchase_is_denied() {
    let app = TestApp::with_plan(None).await;

    for amount in [500, 1500, 4000] {
        let (status, body) = app
            .post("/api/plans/credits", None, json!({ "amount": amount }))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accepted"], false);
        assert_eq!(body["notification"]["severity"], "error");
        assert_eq!(body["notification"]["title"], "Acesso Restrito");
    }
    assert_eq!(app.gateway.submission_count(), 0);
}

#[tokio::test]
async fn agency_purchases_succeed() {
    let app = TestApp::with_plan(Some("AGENCY")).await;

    for amount in [500, 1500, 4000] {
        let (status, body) = app
            .post("/api/plans/credits", Some(VIEWER), json!({ "amount": amount }))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["accepted"], true);
        assert_eq!(body["notification"]["severity"], "success");
        assert_eq!(body["notification"]["dismiss_after_ms"], 4000);
    }

    let amounts: Vec<u32> = app
        .gateway
        .submissions()
        .into_iter()
        .filter_map(|s| match s.command {
            BillingCommand::PurchaseCredits { amount, .. } => Some(amount),
            _ => None,
        })
        .collect();
    assert_eq!(amounts, vec![500, 1500, 4000]);
}

#[tokio::test]
async fn unknown_package_is_bad_request() {
    let app = TestApp::with_plan(Some("PRO")).await;

    let (status, body) = app
        .post("/api/plans/credits", Some(VIEWER), json!({ "amount": 42 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "UNKNOWN_CREDIT_PACKAGE");
}

#[tokio::test]
async fn health_probe() {
    let app = TestApp::with_plan(None).await;
    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn server_gateway_keeps_no_history() {
    let gateway = SimulatedBillingGateway::instant();
    let state = PlansAppState {
        plan_reader: Arc::new(InMemoryPlanReader::new()),
        billing_gateway: Arc::new(gateway.clone()),
        settings: PlansSettings::default(),
    };
    let router = create_app(state, &ServerConfig::default());

    for _ in 0..500 {
        let request = Request::builder()
            .method("POST")
            .uri("/api/plans/change")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "tier": "pro" }).to_string()))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    assert_eq!(gateway.submission_count(), 0);
}

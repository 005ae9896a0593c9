use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use plan_ladder::adapters::http::{create_app, PlansAppState};
use plan_ladder::adapters::{
    InMemoryPlanReader, PostgresPlanReader, SimulatedBillingGateway, StaticPlanReader,
};
use plan_ladder::config::{AppConfig, ServerConfig};
use plan_ladder::ports::PlanReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.server);
    config.validate().context("validating configuration")?;

    let plan_reader = plan_reader(&config).await?;
    let state = PlansAppState {
        plan_reader,
        billing_gateway: Arc::new(SimulatedBillingGateway::new(config.plans.billing_latency())),
        settings: config.plans.settings(),
    };

    let app = create_app(state, &config.server);
    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()?).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        environment = ?config.server.environment,
        "Plan Ladder listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Pretty logs in development, JSON in production. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
            .ok();
    } else {
        registry.with(fmt::layer().with_target(false)).try_init().ok();
    }
}

async fn plan_reader(config: &AppConfig) -> anyhow::Result<Arc<dyn PlanReader>> {
    if let Some(plan) = &config.plans.simulated_plan {
        tracing::warn!(plan = %plan, "Every viewer is treated as having the simulated plan");
        return Ok(Arc::new(StaticPlanReader::new(plan.clone())));
    }

    match &config.database {
        Some(database) => {
            let pool = database
                .pool_options()
                .connect(&database.url)
                .await
                .context("connecting to PostgreSQL")?;
            tracing::info!("Connected to database");
            Ok(Arc::new(PostgresPlanReader::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, plans are read from memory");
            Ok(Arc::new(InMemoryPlanReader::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

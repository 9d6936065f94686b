use anyhow::{Context, Result};
use balance_catalog::application::{
    commands::edits::ApplyEditPlanCommand, dto::PlanReportDto, services::ApplicationServices,
};
use balance_catalog::config::{AppConfig, RunMode};
use balance_catalog::infrastructure::{
    database,
    gateways::{PostgresBalanceArticleGateway, SqlScript, SqlScriptGateway},
    plan_file,
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let plan = plan_file::load(config.plan_path())?;

    let report = match config.run_mode() {
        RunMode::Execute => execute(&config, plan).await?,
        RunMode::Script => write_script(&config, plan).await?,
    };

    tracing::info!(
        requests = report.applied.len(),
        calls = report.call_count(),
        "done"
    );
    Ok(())
}

async fn execute(config: &AppConfig, plan: ApplyEditPlanCommand) -> Result<PlanReportDto> {
    let pool = database::init_pool(config.connect_options()?.clone(), config.connect_timeout())
        .await
        .context("cannot connect to the balance database")?;
    tracing::info!("connected to the balance database");

    let gateway = Arc::new(PostgresBalanceArticleGateway::new(pool.clone()));
    let services = ApplicationServices::new(gateway, Arc::new(SystemClock));

    let outcome = services.edit_commands.apply_plan(plan).await;
    pool.close().await;
    Ok(outcome?)
}

async fn write_script(config: &AppConfig, plan: ApplyEditPlanCommand) -> Result<PlanReportDto> {
    let gateway = Arc::new(SqlScriptGateway::new());
    let services = ApplicationServices::new(gateway.clone(), Arc::new(SystemClock));

    let source = plan.source.clone();
    let report = services.edit_commands.apply_plan(plan).await?;

    let script = SqlScript::new(source, gateway.statements());
    let path = config.script_output_path();
    tokio::fs::write(path, script.render(services.clock().now()))
        .await
        .with_context(|| format!("cannot write SQL script to {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        statements = script.statement_count(),
        "SQL script written"
    );
    Ok(report)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

// catalog_seeder/src/main.rs

mod config;
mod errors;

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};

use catalog_seed::{run_seed, CatalogApi, HttpCatalogApi, SeedSummary};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      init_tracing(false);
      tracing::error!(error = %e, "Failed to load seeder configuration.");
      eprintln!("{e}");
      return ExitCode::from(e.exit_code());
    }
  };
  init_tracing(app_config.log_json);

  match seed(app_config).await {
    Ok(summary) => {
      println!("{summary}");
      ExitCode::SUCCESS
    }
    Err(e) => {
      tracing::error!(error = %e, "Seeding failed.");
      eprintln!("ERROR: {e}");
      if let Some(hint) = e.remediation() {
        eprintln!("HINT: {hint}");
      }
      ExitCode::from(e.exit_code())
    }
  }
}

async fn seed(app_config: AppConfig) -> AppResult<SeedSummary> {
  let config = Arc::new(app_config.seed);
  let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalogApi::new(&config)?);
  run_seed(config, api).await.map_err(AppError::from)
}

fn init_tracing(json: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

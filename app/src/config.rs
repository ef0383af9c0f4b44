// catalog_seeder/src/config.rs

use crate::errors::{AppError, Result};
use catalog_seed::{SeedConfig, SeedError};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub seed: SeedConfig,
  /// Emit logs as JSON lines instead of the human-readable format.
  pub log_json: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source. Unset variables keep the
  /// `SeedConfig` defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = SeedConfig::default();

    let base_url = lookup("SEED_BASE_URL").unwrap_or_else(|| defaults.base_url.clone());
    let target_products = parse_or(&lookup, "SEED_TARGET_PRODUCTS", defaults.target_products)?;
    let min_users = parse_or(&lookup, "SEED_MIN_USERS", defaults.min_users)?;
    let category_pool = parse_or(&lookup, "SEED_CATEGORY_POOL", defaults.category_pool)?;
    let price_min = parse_or(&lookup, "SEED_PRICE_MIN", defaults.price_min)?;
    let price_max = parse_or(&lookup, "SEED_PRICE_MAX", defaults.price_max)?;
    let timeout_secs = parse_or(&lookup, "SEED_REQUEST_TIMEOUT_SECS", defaults.request_timeout.as_secs())?;
    let max_retries = parse_or(&lookup, "SEED_MAX_RETRIES", defaults.max_retries)?;
    let rng_seed = match lookup("SEED_RNG_SEED") {
      Some(raw) => Some(parse_value::<u64>("SEED_RNG_SEED", &raw)?),
      None => defaults.rng_seed,
    };
    let log_json = parse_or(&lookup, "SEED_LOG_JSON", false)?;

    let seed = SeedConfig {
      base_url,
      target_products,
      min_users,
      category_pool,
      price_min,
      price_max,
      request_timeout: Duration::from_secs(timeout_secs),
      max_retries,
      rng_seed,
      ..defaults
    };
    seed.validate().map_err(|e| match e {
      SeedError::Config(msg) => AppError::Config(msg),
      other => AppError::from(other),
    })?;

    Ok(Self { seed, log_json })
  }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(name) {
    Some(raw) => parse_value(name, &raw),
    None => Ok(default),
  }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", name, raw, e)))
}

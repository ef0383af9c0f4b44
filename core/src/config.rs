// catalog_seed/src/config.rs

use crate::error::{SeedError, SeedResult};
use std::time::Duration;

/// Immutable settings for one seeding run.
///
/// Built once at startup and shared as `Arc<SeedConfig>`; nothing mutates it
/// afterwards. `Default` reproduces the stock run: 1000 products against a
/// local API.
#[derive(Debug, Clone)]
pub struct SeedConfig {
  pub base_url: String,
  pub target_products: usize,
  pub min_users: usize,
  pub category_pool: usize,
  pub min_categories_per_product: usize,
  pub price_min: f64,
  pub price_max: f64,
  pub request_timeout: Duration,
  pub max_retries: usize,
  pub progress_every: usize,
  /// Pause after each failed product attempt.
  pub retry_pause: Duration,
  /// Pause between category creations.
  pub category_pause: Duration,
  /// Fixed RNG seed for reproducible runs; `None` seeds from entropy.
  pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:8080".to_string(),
      target_products: 1000,
      min_users: 5,
      category_pool: 30,
      min_categories_per_product: 2,
      price_min: 10.0,
      price_max: 5000.0,
      request_timeout: Duration::from_secs(20),
      max_retries: 3,
      progress_every: 50,
      retry_pause: Duration::from_millis(150),
      category_pause: Duration::from_millis(50),
      rng_seed: None,
    }
  }
}

impl SeedConfig {
  pub fn users_endpoint(&self) -> String {
    format!("{}/api/users", self.base_url.trim_end_matches('/'))
  }

  pub fn categories_endpoint(&self) -> String {
    format!("{}/api/categories", self.base_url.trim_end_matches('/'))
  }

  pub fn products_endpoint(&self) -> String {
    format!("{}/api/products", self.base_url.trim_end_matches('/'))
  }

  pub fn product_endpoint(&self, id: i64) -> String {
    format!("{}/{}", self.products_endpoint(), id)
  }

  /// Whether `price` lies within `[price_min, price_max]`.
  pub fn price_in_bounds(&self, price: f64) -> bool {
    (self.price_min..=self.price_max).contains(&price)
  }

  pub fn validate(&self) -> SeedResult<()> {
    if self.base_url.trim().is_empty() {
      return Err(SeedError::Config("base_url must not be empty".to_string()));
    }
    if self.target_products == 0 {
      return Err(SeedError::Config("target_products must be at least 1".to_string()));
    }
    if self.min_users == 0 {
      return Err(SeedError::Config("min_users must be at least 1".to_string()));
    }
    if self.min_categories_per_product < 2 {
      return Err(SeedError::Config(
        "min_categories_per_product must be at least 2".to_string(),
      ));
    }
    if self.category_pool < self.min_categories_per_product {
      return Err(SeedError::Config(format!(
        "category_pool ({}) must be >= min_categories_per_product ({})",
        self.category_pool, self.min_categories_per_product
      )));
    }
    if !(self.price_min.is_finite() && self.price_max.is_finite()) || self.price_min >= self.price_max {
      return Err(SeedError::Config(format!(
        "price bounds must satisfy price_min < price_max (got {}..{})",
        self.price_min, self.price_max
      )));
    }
    if self.max_retries == 0 {
      return Err(SeedError::Config("max_retries must be at least 1".to_string()));
    }
    if self.progress_every == 0 {
      return Err(SeedError::Config("progress_every must be at least 1".to_string()));
    }
    Ok(())
  }
}

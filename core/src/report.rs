// catalog_seed/src/report.rs

//! End-of-run summary and the final target check.

use crate::config::SeedConfig;
use crate::error::{SeedError, SeedResult};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
  pub tag: String,
  pub target: usize,
  /// Verified products, the probe included.
  pub created: usize,
  pub failures: usize,
  pub users: usize,
  pub categories: usize,
}

impl SeedSummary {
  pub fn target_met(&self) -> bool {
    self.created >= self.target
  }

  /// `TargetShortfall` unless every targeted product was created and verified.
  pub fn ensure_target_met(&self) -> SeedResult<()> {
    if self.target_met() {
      Ok(())
    } else {
      Err(SeedError::TargetShortfall {
        created: self.created,
        target: self.target,
        failures: self.failures,
      })
    }
  }

  /// Logs the counts, plus the satisfied invariants when the target was met.
  pub fn log(&self, cfg: &SeedConfig) {
    info!(
      tag = %self.tag,
      target = self.target,
      created = self.created,
      failures = self.failures,
      "Seeding summary."
    );
    if self.target_met() {
      for line in self.invariant_lines(cfg) {
        info!("  - {}", line);
      }
    }
  }

  /// Human-readable list of the guarantees a successful run provides.
  pub fn invariant_lines(&self, cfg: &SeedConfig) -> Vec<String> {
    vec![
      format!(">= {} users (found {})", cfg.min_users, self.users),
      format!("{} products created", self.created),
      format!(
        "{} categories per product (pool of {})",
        cfg.min_categories_per_product, self.categories
      ),
      format!("prices within {}..{}", cfg.price_min, cfg.price_max),
      format!("searchable names tagged '{}'", self.tag),
    ]
  }
}

impl fmt::Display for SeedSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "[{}] target={} created={} failures={} users={} categories={}",
      self.tag, self.target, self.created, self.failures, self.users, self.categories
    )
  }
}

// catalog_seed/src/products.rs

//! Bulk product creation with bounded retries and read-back verification.

use crate::api::CatalogApi;
use crate::config::SeedConfig;
use crate::extract::{extract_category_ids, extract_id};
use crate::generate::{pick_id, product_draft, sample_ids};
use crate::models::ProductDraft;
use rand::Rng;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Why an accepted product does not count.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
  #[error("price {price} outside [{min}, {max}]")]
  PriceOutOfBounds { price: f64, min: f64, max: f64 },

  #[error("{found} distinct categories stored, {required} required")]
  TooFewCategories { found: usize, required: usize },
}

/// Result of a single creation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
  /// No reply, an unexpected status, or a reply without an integer id.
  TransportFailure,
  /// The service created the product, but the stored resource breaks an
  /// invariant.
  AcceptedInvalid { id: i64, violation: Violation },
  /// Created and verified.
  Verified { id: i64 },
}

/// Result of up to `max_retries` attempts for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOutcome {
  Created { id: i64, attempts: usize },
  Failed { attempts: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkTally {
  /// Verified product ids, in creation order.
  pub created_ids: Vec<i64>,
  pub failures: usize,
}

/// Checks a product read back from the service.
///
/// The stored price is preferred; `submitted_price` is used when the
/// representation carries no numeric price.
pub fn verify_product(product: &Value, submitted_price: f64, cfg: &SeedConfig) -> Result<(), Violation> {
  let price = product.get("price").and_then(Value::as_f64).unwrap_or(submitted_price);
  if !cfg.price_in_bounds(price) {
    return Err(Violation::PriceOutOfBounds {
      price,
      min: cfg.price_min,
      max: cfg.price_max,
    });
  }

  let found = extract_category_ids(product).len();
  if found < cfg.min_categories_per_product {
    return Err(Violation::TooFewCategories {
      found,
      required: cfg.min_categories_per_product,
    });
  }
  Ok(())
}

/// One creation attempt followed by a read-back of the created product.
///
/// If the read-back fails, the creation response is verified instead.
pub async fn attempt_product(
  api: &dyn CatalogApi,
  cfg: &SeedConfig,
  draft: &ProductDraft,
  owner: i64,
  categories: Vec<i64>,
) -> AttemptOutcome {
  let Some(created) = api.create_product(&draft.to_payload(owner, categories)).await else {
    return AttemptOutcome::TransportFailure;
  };
  let Some(id) = extract_id(&created) else {
    return AttemptOutcome::TransportFailure;
  };

  let fresh = api.fetch_product(id).await.unwrap_or(created);
  match verify_product(&fresh, draft.price, cfg) {
    Ok(()) => AttemptOutcome::Verified { id },
    Err(violation) => AttemptOutcome::AcceptedInvalid { id, violation },
  }
}

/// Tries `draft` up to `cfg.max_retries` times, each attempt with a freshly
/// drawn owner and category sample.
#[instrument(name = "products::create", skip_all, fields(index = draft.index))]
pub async fn create_with_retries<R: Rng + Send>(
  api: &dyn CatalogApi,
  cfg: &SeedConfig,
  rng: &mut R,
  draft: &ProductDraft,
  user_ids: &[i64],
  category_ids: &[i64],
) -> ProductOutcome {
  for attempt in 1..=cfg.max_retries {
    let categories = sample_ids(rng, category_ids, cfg.min_categories_per_product);
    let outcome = match pick_id(rng, user_ids) {
      Some(owner) => attempt_product(api, cfg, draft, owner, categories).await,
      None => AttemptOutcome::TransportFailure,
    };

    match outcome {
      AttemptOutcome::Verified { id } => {
        debug!(id, attempt, "Product verified.");
        return ProductOutcome::Created { id, attempts: attempt };
      }
      AttemptOutcome::AcceptedInvalid { id, violation } => {
        warn!(id, %violation, "Product accepted but invalid. Retry {}/{}.", attempt, cfg.max_retries);
      }
      AttemptOutcome::TransportFailure => {
        debug!(attempt, "Product creation failed.");
      }
    }

    if !cfg.retry_pause.is_zero() {
      tokio::time::sleep(cfg.retry_pause).await;
    }
  }

  warn!(name = %draft.name, "Giving up on product after {} attempts.", cfg.max_retries);
  ProductOutcome::Failed {
    attempts: cfg.max_retries,
  }
}

/// Creates products `1..target` on top of the already-created `tally`
/// (normally holding the probe product).
#[instrument(name = "products::bulk", skip_all, fields(target = cfg.target_products, tag = %tag))]
pub async fn bulk_create<R: Rng + Send>(
  api: &dyn CatalogApi,
  cfg: &SeedConfig,
  rng: &mut R,
  tag: &str,
  user_ids: &[i64],
  category_ids: &[i64],
  mut tally: BulkTally,
) -> BulkTally {
  let target = cfg.target_products;
  info!(owners = user_ids.len(), "Creating {} products.", target);

  for i in 1..target {
    let draft = product_draft(rng, i, tag, cfg);
    match create_with_retries(api, cfg, rng, &draft, user_ids, category_ids).await {
      ProductOutcome::Created { id, .. } => tally.created_ids.push(id),
      ProductOutcome::Failed { .. } => tally.failures += 1,
    }

    if (i + 1) % cfg.progress_every == 0 {
      info!(
        ok = tally.created_ids.len(),
        failures = tally.failures,
        "Progress {}/{}",
        i + 1,
        target
      );
    }
  }
  tally
}

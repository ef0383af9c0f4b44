// catalog_seed/src/bootstrap.rs

//! Makes sure enough users and categories exist before products are created.

use crate::api::CatalogApi;
use crate::config::SeedConfig;
use crate::error::{SeedError, SeedResult};
use crate::extract::collect_ids;
use crate::generate::{rand_suffix, stamp_nanos};
use crate::models::{NewCategory, NewUser};
use rand::Rng;
use serde_json::Value;
use tracing::{info, instrument, warn};

/// Lists users, tops them up to `cfg.min_users` and returns their ids.
///
/// Fails with `InsufficientUsers` when fewer than `min_users` entries carry an
/// integer id afterwards.
#[instrument(name = "bootstrap::users", skip_all, fields(min_users = cfg.min_users))]
pub async fn bootstrap_users(api: &dyn CatalogApi, cfg: &SeedConfig) -> SeedResult<Vec<i64>> {
  let mut users = api.list_users().await;
  if users.len() < cfg.min_users {
    info!(
      existing = users.len(),
      "Not enough users, creating up to {}.", cfg.min_users
    );
    for idx in users.len() + 1..=cfg.min_users {
      match api.create_user(&NewUser::seeded(idx, stamp_nanos())).await {
        Some(created @ Value::Object(_)) => users.push(created),
        Some(_) | None => warn!(idx, "User creation returned no usable body."),
      }
    }
  }
  info!(count = users.len(), "Users ready.");

  let ids = dedup(collect_ids(&users));
  if ids.len() < cfg.min_users {
    return Err(SeedError::InsufficientUsers {
      found: ids.len(),
      required: cfg.min_users,
    });
  }
  Ok(ids)
}

/// Lists categories, tops the pool up to `cfg.category_pool` and returns the
/// ids from a fresh listing.
///
/// Creation responses are never read for ids; the list endpoint is the only
/// source. Fails with `InsufficientCategories` when fewer than
/// `min_categories_per_product` ids are available.
#[instrument(name = "bootstrap::categories", skip_all, fields(pool = cfg.category_pool))]
pub async fn bootstrap_categories<R: Rng + Send>(
  api: &dyn CatalogApi,
  cfg: &SeedConfig,
  rng: &mut R,
) -> SeedResult<Vec<i64>> {
  let mut categories = api.list_categories().await;
  if categories.len() < cfg.category_pool {
    info!(
      existing = categories.len(),
      "Category pool short, creating up to {}.", cfg.category_pool
    );
    for idx in categories.len() + 1..=cfg.category_pool {
      let category = NewCategory::seeded(idx, &rand_suffix(rng, 4));
      if !api.create_category(&category).await {
        warn!(idx, name = %category.name, "Category creation rejected.");
      }
      if !cfg.category_pause.is_zero() {
        tokio::time::sleep(cfg.category_pause).await;
      }
    }
    categories = api.list_categories().await;
  }
  info!(count = categories.len(), "Categories ready.");

  let ids = dedup(collect_ids(&categories));
  if ids.len() < cfg.min_categories_per_product {
    return Err(SeedError::InsufficientCategories {
      found: ids.len(),
      required: cfg.min_categories_per_product,
    });
  }
  Ok(ids)
}

/// Drops repeated ids, keeping first-seen order.
fn dedup(ids: Vec<i64>) -> Vec<i64> {
  let mut seen = std::collections::HashSet::with_capacity(ids.len());
  ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

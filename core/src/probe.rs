// catalog_seed/src/probe.rs

//! Fail-fast check that the service stores several categories per product.

use crate::api::CatalogApi;
use crate::config::SeedConfig;
use crate::error::{SeedError, SeedResult};
use crate::extract::{extract_category_ids, extract_id};
use crate::generate::{pick_id, product_draft, sample_ids};
use rand::Rng;
use tracing::{info, instrument};

/// Creates product `#0` with exactly `min_categories_per_product` categories
/// and checks the service kept them all.
///
/// Returns the probe's id; the probe counts as the first seeded product.
#[instrument(name = "probe::many_to_many", skip_all, fields(tag = %tag))]
pub async fn probe_many_to_many<R: Rng + Send>(
  api: &dyn CatalogApi,
  cfg: &SeedConfig,
  rng: &mut R,
  user_ids: &[i64],
  category_ids: &[i64],
  tag: &str,
) -> SeedResult<i64> {
  let required = cfg.min_categories_per_product;
  let draft = product_draft(rng, 0, tag, cfg);
  let categories = sample_ids(rng, category_ids, required);
  let owner = pick_id(rng, user_ids).ok_or(SeedError::InsufficientUsers {
    found: 0,
    required: cfg.min_users,
  })?;

  info!(?categories, owner, "Probing product creation with multiple categories.");
  let created = api.create_product(&draft.to_payload(owner, categories)).await;
  let Some(product_id) = created.as_ref().and_then(extract_id) else {
    return Err(SeedError::ManyToManyUnsupported {
      detail: "POST /api/products with 'categoryIds' did not return a product id".to_string(),
    });
  };

  let stored = match api.fetch_product(product_id).await {
    Some(fresh) => extract_category_ids(&fresh),
    None => created.as_ref().map(extract_category_ids).unwrap_or_default(),
  };
  if stored.len() < required {
    return Err(SeedError::CategoriesNotPersisted {
      product_id,
      found: stored.len(),
      required,
    });
  }

  info!(product_id, "Many-to-many categories supported.");
  Ok(product_id)
}

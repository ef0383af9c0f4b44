// catalog_seed/src/models/category.rs

use serde::Serialize;

pub const SEED_CATEGORY_DESCRIPTION: &str = "Seed category for bulk testing";

/// Body of `POST /api/categories`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCategory {
  pub name: String,
  pub description: String,
}

impl NewCategory {
  pub fn seeded(idx: usize, suffix: &str) -> Self {
    Self {
      name: format!("Seed Category {idx} {suffix}"),
      description: SEED_CATEGORY_DESCRIPTION.to_string(),
    }
  }
}

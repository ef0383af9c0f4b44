// catalog_seed/src/models/product.rs

use serde::Serialize;

/// Body of `POST /api/products`.
///
/// Serialized as `{name, price, description, userId, categoryIds}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
  pub name: String,
  pub price: f64,
  pub description: String,
  pub user_id: i64,
  pub category_ids: Vec<i64>,
}

/// The generated, owner-independent part of a product.
///
/// A draft is built once per product; every creation attempt pairs it with
/// its own owner and category sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
  pub index: usize,
  pub name: String,
  pub description: String,
  pub price: f64,
}

impl ProductDraft {
  pub fn to_payload(&self, user_id: i64, category_ids: Vec<i64>) -> NewProduct {
    NewProduct {
      name: self.name.clone(),
      price: self.price,
      description: self.description.clone(),
      user_id,
      category_ids,
    }
  }
}
